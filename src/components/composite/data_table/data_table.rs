//! DataTable Component
//!
//! A paged table: columns format the rows of a `DataProvider`, pagination
//! selects the visible page and keyboard focus moves over that page.

use tracing::debug;

use super::column::{Column, resolve_widths};
use super::data_provider::DataProvider;
use super::focus::{CellPosition, FocusChange, NavKey, TableFocus};
use super::pagination::Pagination;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::PageWindow;
use crate::i18n::{Locale, tr};

/// DataTable component
pub struct DataTable<P: DataProvider> {
    columns: Vec<Column<P::Row>>,
    provider: P,
    page_size: usize,
    pagination: Pagination,
    focus: TableFocus,
}

impl<P: DataProvider> DataTable<P> {
    /// Create a new data table showing the first page
    pub fn new(provider: P, columns: Vec<Column<P::Row>>) -> Self {
        let page_size = DEFAULT_PAGE_SIZE;
        let pagination = Pagination::for_items(provider.len(), page_size);
        let mut table = Self {
            focus: TableFocus::new(0, columns.len(), page_size),
            columns,
            provider,
            page_size,
            pagination,
        };
        table.sync_focus();
        table
    }

    /// Set the number of rows per page
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.pagination.set_total_items(self.provider.len(), self.page_size);
        self.focus.set_page_jump(self.page_size);
        self.sync_focus();
        self
    }

    /// Configure the pagination control (siblings, boundaries, handler)
    pub fn with_pagination(mut self, configure: impl FnOnce(Pagination) -> Pagination) -> Self {
        self.pagination = configure(self.pagination);
        self.sync_focus();
        self
    }

    // ==================== Getters ====================

    pub fn columns(&self) -> &[Column<P::Row>] {
        &self.columns
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn focused_cell(&self) -> Option<CellPosition> {
        self.focus.focused()
    }

    /// Item window of the current page
    pub fn window(&self) -> PageWindow {
        self.pagination.window(self.page_size)
    }

    /// Rows of the current page
    pub fn visible_rows(&self) -> Vec<P::Row> {
        self.provider.rows(self.window().range())
    }

    /// Header labels in column order
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.label.as_str()).collect()
    }

    /// Position of the column with `id`
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    /// Pixel width of every column within `available`
    pub fn column_widths(&self, available: f32) -> Vec<f32> {
        let widths: Vec<_> = self.columns.iter().map(|col| col.width).collect();
        resolve_widths(&widths, available)
    }

    /// Placeholder shown in place of the body when there are no rows
    pub fn empty_text(&self, locale: Locale) -> Option<String> {
        self.provider.is_empty().then(|| tr(locale, "table.no_data"))
    }

    /// Formatted text of the current page, one `Vec` per row
    pub fn visible_cells(&self) -> Vec<Vec<String>> {
        self.visible_rows()
            .iter()
            .map(|row| self.columns.iter().map(|col| col.cell_text(row)).collect())
            .collect()
    }

    /// Text of a cell on the current page
    pub fn cell_text(&self, position: CellPosition) -> Option<String> {
        let column = self.columns.get(position.col)?;
        let window = self.window();
        if position.row >= window.len {
            return None;
        }
        let row = self.provider.row(window.offset + position.row)?;
        Some(column.cell_text(&row))
    }

    // ==================== Interaction ====================

    /// Apply a navigation key to the cell focus
    pub fn handle_key(&mut self, key: NavKey) -> FocusChange {
        self.focus.handle(key)
    }

    /// Focus a cell of the current page (pointer click)
    pub fn focus_cell(&mut self, position: CellPosition) -> bool {
        self.focus.focus(position)
    }

    /// Change page; focus is kept on the same row index, clamped to the page
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.go_to(page);
        if changed {
            self.sync_focus();
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        match self.pagination.current_page().checked_add(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.pagination.current_page().checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Replace the data source. The table stays on the current page when it
    /// still exists.
    pub fn set_provider(&mut self, provider: P) {
        self.provider = provider;
        self.pagination.set_total_items(self.provider.len(), self.page_size);
        debug!(
            rows = self.provider.len(),
            pages = self.pagination.total_pages(),
            "DataTable provider replaced"
        );
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let rows = self.window().len;
        self.focus.resize(rows, self.columns.len());
    }
}
