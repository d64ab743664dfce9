//! Pagination Component
//!
//! Page navigation state for lists and the DataTable. Holds the current
//! page, exposes the page markers to render and guards every page change.

use tracing::debug;

use crate::domain::{PageMarker, PageWindow, PaginationRequest, page_count};
use crate::i18n::{Locale, tr, tr_format};

type PageChangeHandler = Box<dyn Fn(usize) + 'static>;

/// Localized labels of the navigation controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLabels {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
    /// Prompt next to the page number input
    pub jump: String,
}

impl PaginationLabels {
    pub fn new(locale: Locale) -> Self {
        Self {
            first: tr(locale, "pagination.first"),
            previous: tr(locale, "pagination.previous"),
            next: tr(locale, "pagination.next"),
            last: tr(locale, "pagination.last"),
            jump: tr(locale, "pagination.jump"),
        }
    }
}

/// Pagination component
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    sibling_count: usize,
    boundary_count: usize,
    disabled: bool,
    on_page_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a new pagination component.
    ///
    /// `current_page` is clamped into `[1, total_pages]`.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            total_items: 0,
            sibling_count: 1,
            boundary_count: 1,
            disabled: false,
            on_page_change: None,
        }
    }

    /// Create a pagination sized for `total_items` at `page_size` per page
    pub fn for_items(total_items: usize, page_size: usize) -> Self {
        Self::new(1, page_count(total_items, page_size)).total_items(total_items)
    }

    /// Set the item count shown in the summary
    pub fn total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    /// Set the number of pages shown on each side of the current page
    pub fn sibling_count(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    /// Set the number of pages always shown at each end
    pub fn boundary_count(mut self, count: usize) -> Self {
        self.boundary_count = count;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn can_previous(&self) -> bool {
        !self.disabled && self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        !self.disabled && self.current_page < self.total_pages
    }

    /// The range request for the current state
    pub fn request(&self) -> PaginationRequest {
        PaginationRequest {
            current_page: self.current_page,
            total_pages: self.total_pages,
            sibling_count: self.sibling_count,
            boundary_count: self.boundary_count,
        }
    }

    /// Page buttons to render
    pub fn markers(&self) -> Vec<PageMarker> {
        self.request().markers()
    }

    /// Items of the current page at `page_size` per page
    pub fn window(&self, page_size: usize) -> PageWindow {
        PageWindow::new(self.current_page, page_size, self.total_items)
    }

    /// Summary line such as "11-20 of 95 items"
    pub fn summary(&self, page_size: usize, locale: Locale) -> String {
        match self.window(page_size).display_bounds() {
            Some((first, last)) => tr_format(
                locale,
                "pagination.summary",
                &[
                    ("first", &first.to_string()),
                    ("last", &last.to_string()),
                    ("total", &self.total_items.to_string()),
                ],
            ),
            None => tr(locale, "pagination.empty"),
        }
    }

    /// Labels of the first/previous/next/last buttons and the jump input
    pub fn labels(&self, locale: Locale) -> PaginationLabels {
        PaginationLabels::new(locale)
    }

    // ==================== Navigation ====================

    /// Request a change to `page`.
    ///
    /// Ignored when disabled, when `page` is the current page, or when it is
    /// outside `[1, total_pages]`. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if self.disabled {
            debug!(page, "Pagination disabled, ignoring page change");
            return false;
        }
        if page == self.current_page || !(1..=self.total_pages).contains(&page) {
            debug!(page, total = self.total_pages, "Rejected page change");
            return false;
        }

        debug!(from = self.current_page, to = page, "Page changed");
        self.current_page = page;
        if let Some(handler) = &self.on_page_change {
            handler(page);
        }
        true
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        match self.current_page.checked_add(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    /// Jump to a page typed by the user.
    ///
    /// Non-numeric input is ignored like an out-of-range page.
    pub fn jump_to(&mut self, input: &str) -> bool {
        match input.trim().parse::<usize>() {
            Ok(page) => self.go_to(page),
            Err(e) => {
                debug!(input, error = %e, "Rejected jump input");
                false
            }
        }
    }

    /// Activate a rendered marker; ellipses are inert
    pub fn activate(&mut self, marker: PageMarker) -> bool {
        marker.page().is_some_and(|page| self.go_to(page))
    }

    // ==================== Setters ====================

    /// Replace the current page from outside (controlled mode).
    ///
    /// Does not fire the change handler.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    /// Replace the page count, clamping the current page into range
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Resize for a new item count at `page_size` per page
    pub fn set_total_items(&mut self, total_items: usize, page_size: usize) {
        self.total_items = total_items;
        self.set_total_pages(page_count(total_items, page_size));
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
