//! Popover Tracker
//!
//! Keeps a popover placed next to its anchor while it is open. Geometry is
//! read through `LayoutHost` so the placement stays testable without a real
//! window system.

use tracing::debug;

use crate::domain::{PlacementOptions, PopoverPlacement, Rect, Size, place_popover};

/// Measurement capability supplied by the host platform
pub trait LayoutHost {
    /// Bounding rectangle of the anchor element
    fn anchor_rect(&self) -> Option<Rect>;

    /// Bounding rectangle of the rendered popover, `None` before it is mounted
    fn popover_rect(&self) -> Option<Rect>;

    /// Current viewport dimensions
    fn viewport_size(&self) -> Size;
}

/// Why the placement is being recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositionTrigger {
    Open,
    /// Window or any ancestor scroll container scrolled
    Scroll,
    Resize,
}

/// Placement state of one popover
#[derive(Debug, Clone, Default)]
pub struct PopoverTracker {
    options: PlacementOptions,
    active: bool,
    placement: Option<PopoverPlacement>,
}

impl PopoverTracker {
    pub fn new(options: PlacementOptions) -> Self {
        Self {
            options,
            active: false,
            placement: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last computed placement while open
    pub fn placement(&self) -> Option<PopoverPlacement> {
        self.placement
    }

    pub fn options(&self) -> PlacementOptions {
        self.options
    }

    /// Start tracking before the popover is mounted; the first reposition
    /// places it
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Start tracking and place the freshly mounted popover
    pub fn open(&mut self, host: &impl LayoutHost) -> Option<PopoverPlacement> {
        self.activate();
        self.reposition(host, RepositionTrigger::Open)
    }

    /// Stop tracking; later scroll/resize events are ignored
    pub fn close(&mut self) {
        self.active = false;
        self.placement = None;
    }

    /// Recompute from fresh measurements. Inactive trackers ignore events.
    pub fn reposition(
        &mut self,
        host: &impl LayoutHost,
        trigger: RepositionTrigger,
    ) -> Option<PopoverPlacement> {
        if !self.active {
            return None;
        }

        let (Some(anchor), Some(popover)) = (host.anchor_rect(), host.popover_rect()) else {
            debug!(?trigger, "Popover not measurable yet");
            self.placement = None;
            return None;
        };

        let size = Size::new(popover.width, popover.height);
        let placement = place_popover(anchor, size, host.viewport_size(), self.options);
        debug!(
            ?trigger,
            edge = ?placement.edge,
            top = placement.top,
            left = placement.left,
            "Popover placed"
        );
        self.placement = Some(placement);
        self.placement
    }
}
