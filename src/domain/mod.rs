//! Domain - Pure Widget Models
//!
//! Stateless computations behind the components. Nothing here holds
//! callbacks or reads the clock; every function returns a fresh value.

pub mod calendar;
pub mod pagination;
pub mod placement;
pub mod selection;

pub use calendar::{
    CalendarCell, CalendarContext, CalendarDay, DateConstraints, YearMonth, calendar_days,
    month_grid, weekday_order,
};
pub use pagination::{PageMarker, PageWindow, PaginationRequest, page_count, page_range};
pub use placement::{Edge, PlacementOptions, PopoverPlacement, Rect, Size, place_popover};
pub use selection::{DateSelection, RangeSelection, SelectionMode, Transition};
