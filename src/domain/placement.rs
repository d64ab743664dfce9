//! Placement - Popover Positioning
//!
//! Chooses where a popover (date picker panel, dropdown) goes relative to
//! its anchor so that as much of it as possible stays inside the viewport.
//! All coordinates are viewport-relative pixels.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_POPOVER_OFFSET, DEFAULT_VIEWPORT_INSET};

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which side of the anchor the popover is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Above,
    #[default]
    Below,
}

/// Computed popover position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopoverPlacement {
    pub top: f32,
    pub left: f32,
    pub edge: Edge,
}

/// Tunables of the placement algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Minimum distance kept from the viewport's left and right edges
    pub viewport_inset: f32,
    /// Gap between anchor and popover
    pub offset: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            viewport_inset: DEFAULT_VIEWPORT_INSET,
            offset: DEFAULT_POPOVER_OFFSET,
        }
    }
}

/// Place a popover of `popover` size next to `anchor`.
///
/// Below is preferred; the popover flips above only when it does not fit
/// below and there is more room above. Horizontally it is left-aligned with
/// the anchor, pulled left to keep its right edge in view, and never placed
/// left of `viewport_inset`.
pub fn place_popover(
    anchor: Rect,
    popover: Size,
    viewport: Size,
    options: PlacementOptions,
) -> PopoverPlacement {
    let space_below = viewport.height - anchor.bottom();
    let space_above = anchor.top;

    let (edge, top) = if space_below < popover.height && space_above > space_below {
        (Edge::Above, anchor.top - popover.height - options.offset)
    } else {
        (Edge::Below, anchor.bottom() + options.offset)
    };

    let max_left = viewport.width - popover.width - options.viewport_inset;
    let left = anchor.left.min(max_left).max(options.viewport_inset);

    PopoverPlacement { top, left, edge }
}
