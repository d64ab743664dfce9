//! Widget Constants
//!
//! Centralized defaults shared by the widget models and the config layer.

/// Cells in a calendar grid (6 weeks of 7 days)
pub const CALENDAR_GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: u32 = 7;

/// Years a calendar can navigate to
pub const MIN_CALENDAR_YEAR: i32 = 1;
pub const MAX_CALENDAR_YEAR: i32 = 9999;

/// Pagination defaults
pub const DEFAULT_SIBLING_COUNT: usize = 1;
pub const DEFAULT_BOUNDARY_COUNT: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum gap between a popover and the viewport's left edge, in pixels
pub const DEFAULT_VIEWPORT_INSET: f32 = 8.0;

/// Gap between a popover and its anchor, in pixels
pub const DEFAULT_POPOVER_OFFSET: f32 = 4.0;

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "headless-ui.toml";
