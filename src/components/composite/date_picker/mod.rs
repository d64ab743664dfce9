//! DatePicker Component
//!
//! Calendar popover for picking a single date or a date range.

pub mod picker;
pub mod popover;

pub use picker::{CloseReason, DatePicker, PickerLabels};
pub use popover::{LayoutHost, PopoverTracker, RepositionTrigger};
