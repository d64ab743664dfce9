//! Pagination - Page Range Model
//!
//! Computes which page buttons a pagination control shows: boundary pages at
//! both ends, sibling pages around the current page, and at most two
//! ellipses collapsing everything else.

use serde::{Deserialize, Serialize};

/// One entry in a pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    /// A clickable page number (1-based)
    Page(usize),
    /// A collapsed run of pages
    Ellipsis,
}

impl PageMarker {
    /// Page number, if this marker is a page
    pub fn page(self) -> Option<usize> {
        match self {
            PageMarker::Page(page) => Some(page),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

/// Inputs of the range calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Current page (1-based)
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Pages shown on each side of the current page
    pub sibling_count: usize,
    /// Pages always shown at each end
    pub boundary_count: usize,
}

impl PaginationRequest {
    /// Create a request with one sibling and one boundary page
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            sibling_count: 1,
            boundary_count: 1,
        }
    }

    /// Set the sibling count
    pub fn siblings(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    /// Set the boundary count
    pub fn boundaries(mut self, count: usize) -> Self {
        self.boundary_count = count;
        self
    }

    /// Current page clamped into `[1, total_pages]`
    pub fn clamped_current(&self) -> usize {
        self.current_page.clamp(1, self.total_pages.max(1))
    }

    /// Compute the page markers for this request
    pub fn markers(&self) -> Vec<PageMarker> {
        page_range(self)
    }
}

/// Compute the markers of a pagination bar.
///
/// A `current_page` outside `[1, total_pages]` is clamped into range first.
/// Zero pages yields an empty bar.
pub fn page_range(request: &PaginationRequest) -> Vec<PageMarker> {
    let total = request.total_pages;
    if total == 0 {
        return Vec::new();
    }

    let current = request.clamped_current();
    let siblings = request.sibling_count;
    let boundaries = request.boundary_count;

    // current + two single-page gaps
    let total_slots = siblings
        .saturating_mul(2)
        .saturating_add(3)
        .saturating_add(boundaries.saturating_mul(2));
    if total_slots >= total {
        return (1..=total).map(PageMarker::Page).collect();
    }

    // total > 2 * boundaries + 3 here, so neither subtraction underflows
    let left_boundary_end = boundaries;
    let right_boundary_start = total - boundaries + 1;

    let left_sibling = current.saturating_sub(siblings).max(boundaries + 1);
    let right_sibling = current.saturating_add(siblings).min(total - boundaries);

    let mut markers = Vec::with_capacity(total_slots.min(total) + 2);
    markers.extend((1..=left_boundary_end).map(PageMarker::Page));

    if left_sibling > boundaries + 2 {
        markers.push(PageMarker::Ellipsis);
    } else {
        markers.extend((left_boundary_end + 1..left_sibling).map(PageMarker::Page));
    }

    markers.extend((left_sibling..=right_sibling).map(PageMarker::Page));

    if right_sibling + 1 < total - boundaries {
        markers.push(PageMarker::Ellipsis);
    } else {
        // When the current page sits in the left boundary the sibling window
        // is empty; resume after whatever was already emitted.
        let resume = right_sibling.max(left_sibling.saturating_sub(1)) + 1;
        markers.extend((resume..right_boundary_start).map(PageMarker::Page));
    }

    markers.extend((right_boundary_start..=total).map(PageMarker::Page));
    markers
}

/// Number of pages needed to show `total_items` at `page_size` per page.
///
/// An empty list still has one (empty) page so a control can render.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Items shown on one page of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first item on the page (0-based)
    pub offset: usize,
    /// Number of items on the page
    pub len: usize,
    /// Total number of items in the list
    pub total_items: usize,
}

impl PageWindow {
    /// Window for `page` (1-based, clamped) at `page_size` items per page
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        let pages = page_count(total_items, page_size);
        let page = page.clamp(1, pages);
        let offset = (page - 1).saturating_mul(page_size).min(total_items);
        let len = page_size.min(total_items - offset);
        Self {
            offset,
            len,
            total_items,
        }
    }

    /// Index range of the items on this page
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }

    /// 1-based inclusive `(first, last)` item numbers, `None` if empty
    pub fn display_bounds(&self) -> Option<(usize, usize)> {
        (self.len > 0).then(|| (self.offset + 1, self.offset + self.len))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
