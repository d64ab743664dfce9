//! Column Definition
//!
//! Table columns: identifier, header label, width rule and cell formatter.

/// Column definition for the DataTable
pub struct Column<R> {
    /// Stable identifier, used to look a column up
    pub id: String,
    /// Header label
    pub label: String,
    pub width: ColumnWidth,
    /// Cell formatter
    pub format: Box<dyn Fn(&R) -> String>,
}

/// How a column sizes itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the space left by fixed and percent columns
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of the available width
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex {
            min: None,
            max: None,
        }
    }
}

/// Lay out `widths` across `available` pixels.
///
/// Fixed and percent columns take their size first. Flex columns split the
/// remainder evenly, each clamped into its own `[min, max]`.
pub fn resolve_widths(widths: &[ColumnWidth], available: f32) -> Vec<f32> {
    let available = available.max(0.0);
    let mut claimed = 0.0;
    let mut flex_columns = 0usize;
    for width in widths {
        match *width {
            ColumnWidth::Fixed(px) => claimed += px.max(0.0),
            ColumnWidth::Percent(percent) => claimed += available * percent.max(0.0) / 100.0,
            ColumnWidth::Flex { .. } => flex_columns += 1,
        }
    }

    let share = if flex_columns == 0 {
        0.0
    } else {
        (available - claimed).max(0.0) / flex_columns as f32
    };

    widths
        .iter()
        .map(|width| match *width {
            ColumnWidth::Fixed(px) => px.max(0.0),
            ColumnWidth::Percent(percent) => available * percent.max(0.0) / 100.0,
            ColumnWidth::Flex { min, max } => {
                let upper = max.unwrap_or(f32::INFINITY);
                share.min(upper).max(min.unwrap_or(0.0))
            }
        })
        .collect()
}

impl<R: 'static> Column<R> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        format: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            format: Box::new(format),
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Flexible width with optional bounds
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Format a cell
    pub fn cell_text(&self, row: &R) -> String {
        (self.format)(row)
    }
}
