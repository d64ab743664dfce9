//! DataTable Component
//!
//! A reusable paged data table with keyboard cell focus.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod focus;
pub mod pagination;

pub use column::{Column, ColumnWidth, resolve_widths};
pub use data_provider::{DataProvider, VecDataProvider};
pub use data_table::DataTable;
pub use focus::{CellPosition, FocusChange, NavKey, TableFocus};
pub use pagination::{Pagination, PaginationLabels};
