//! Cell Focus
//!
//! Keyboard focus state machine for a grid of body cells. Focus enters the
//! grid at the first cell on the first navigation key, moves without
//! wrapping, and is clamped whenever the grid shrinks.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A body cell coordinate (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Navigation keys understood by the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    /// First cell of the row (Home)
    RowStart,
    /// Last cell of the row (End)
    RowEnd,
    /// First cell of the grid (Ctrl+Home)
    GridStart,
    /// Last cell of the grid (Ctrl+End)
    GridEnd,
    PageUp,
    PageDown,
    /// Leave the grid (Escape)
    Escape,
}

impl NavKey {
    /// Map a DOM-style key name. Returns `None` for keys the grid ignores.
    pub fn from_key_name(name: &str, ctrl: bool) -> Option<Self> {
        let key = match name {
            "ArrowUp" | "Up" => NavKey::Up,
            "ArrowDown" | "Down" => NavKey::Down,
            "ArrowLeft" | "Left" => NavKey::Left,
            "ArrowRight" | "Right" => NavKey::Right,
            "Home" if ctrl => NavKey::GridStart,
            "Home" => NavKey::RowStart,
            "End" if ctrl => NavKey::GridEnd,
            "End" => NavKey::RowEnd,
            "PageUp" => NavKey::PageUp,
            "PageDown" => NavKey::PageDown,
            "Escape" | "Esc" => NavKey::Escape,
            _ => return None,
        };
        Some(key)
    }
}

/// What a key press did to the focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    /// Focus moved to (or entered at) this cell
    Moved(CellPosition),
    /// Focus left the grid
    Cleared,
    /// Nothing changed (edge reached, empty grid, no focus to clear)
    Unchanged,
}

/// Focus state of a `rows` x `cols` grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFocus {
    rows: usize,
    cols: usize,
    page_jump: usize,
    focused: Option<CellPosition>,
}

impl TableFocus {
    /// Create an unfocused grid; PageUp/PageDown move by `page_jump` rows
    pub fn new(rows: usize, cols: usize, page_jump: usize) -> Self {
        Self {
            rows,
            cols,
            page_jump: page_jump.max(1),
            focused: None,
        }
    }

    pub fn focused(&self) -> Option<CellPosition> {
        self.focused
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Focus a cell directly (pointer click). Out-of-range cells are ignored.
    pub fn focus(&mut self, position: CellPosition) -> bool {
        if position.row >= self.rows || position.col >= self.cols {
            return false;
        }
        self.focused = Some(position);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Change the grid size, clamping the focused cell into it
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        if self.is_empty() {
            self.focused = None;
            return;
        }
        if let Some(pos) = self.focused.as_mut() {
            pos.row = pos.row.min(rows - 1);
            pos.col = pos.col.min(cols - 1);
        }
    }

    pub fn set_page_jump(&mut self, page_jump: usize) {
        self.page_jump = page_jump.max(1);
    }

    /// Apply a navigation key
    pub fn handle(&mut self, key: NavKey) -> FocusChange {
        if key == NavKey::Escape {
            return match self.focused.take() {
                Some(_) => FocusChange::Cleared,
                None => FocusChange::Unchanged,
            };
        }
        if self.is_empty() {
            return FocusChange::Unchanged;
        }

        let Some(current) = self.focused else {
            let origin = CellPosition::new(0, 0);
            self.focused = Some(origin);
            return FocusChange::Moved(origin);
        };

        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let CellPosition { row, col } = current;

        let next = match key {
            NavKey::Up => CellPosition::new(row.saturating_sub(1), col),
            NavKey::Down => CellPosition::new((row + 1).min(last_row), col),
            NavKey::Left => CellPosition::new(row, col.saturating_sub(1)),
            NavKey::Right => CellPosition::new(row, (col + 1).min(last_col)),
            NavKey::RowStart => CellPosition::new(row, 0),
            NavKey::RowEnd => CellPosition::new(row, last_col),
            NavKey::GridStart => CellPosition::new(0, 0),
            NavKey::GridEnd => CellPosition::new(last_row, last_col),
            NavKey::PageUp => CellPosition::new(row.saturating_sub(self.page_jump), col),
            NavKey::PageDown => CellPosition::new((row + self.page_jump).min(last_row), col),
            NavKey::Escape => current,
        };

        if next == current {
            return FocusChange::Unchanged;
        }

        debug!(row = next.row, col = next.col, "Cell focus moved");
        self.focused = Some(next);
        FocusChange::Moved(next)
    }
}
