//! DataProvider Trait
//!
//! Abstraction over the rows a DataTable pages through.

/// Source of the rows a DataTable pages through
pub trait DataProvider: 'static {
    type Row: Clone + 'static;

    /// Total number of rows
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row at `index`, `None` past the end
    fn row(&self, index: usize) -> Option<Self::Row>;

    /// Rows in `range`, skipping missing indices
    fn rows(&self, range: std::ops::Range<usize>) -> Vec<Self::Row> {
        range.filter_map(|i| self.row(i)).collect()
    }
}

/// In-memory rows
pub struct VecDataProvider<R> {
    rows: Vec<R>,
}

impl<R: Clone + 'static> VecDataProvider<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }
}

impl<R: Clone + 'static> DataProvider for VecDataProvider<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<Self::Row> {
        self.rows.get(index).cloned()
    }
}
