//! Composite Components
//!
//! Stateful widgets built on the domain models.

pub mod data_table;
pub mod date_picker;

pub use data_table::{DataTable, Pagination};
pub use date_picker::DatePicker;
