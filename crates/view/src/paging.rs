//! Client-side pagination over an ordered list.

use serde::{Deserialize, Serialize};

use devportal_core::{DomainError, DomainResult, ValueObject};

/// Products shown per page on the listing screen.
pub const PRODUCTS_PER_PAGE: usize = 6;

/// Page-number controls shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// Positive page size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::validation("page size must be positive"));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(PRODUCTS_PER_PAGE)
    }
}

impl ValueObject for PageSize {}

impl TryFrom<usize> for PageSize {
    type Error = DomainError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// Number of pages needed for `len` items, at least 1.
pub fn total_pages(len: usize, page_size: PageSize) -> u32 {
    len.div_ceil(page_size.get()).max(1) as u32
}

/// The contiguous slice for a 1-based page.
///
/// The page number is never clamped: pages past the end, and page 0, are
/// empty. There is no negative-index wraparound.
pub fn visible_page<T>(items: &[T], current_page: u32, page_size: PageSize) -> &[T] {
    if current_page == 0 {
        return &[];
    }
    let start = (current_page as usize - 1).saturating_mul(page_size.get());
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start + page_size.get());
    &items[start..end]
}

/// Ordered page numbers from `max(1, current - radius)` to
/// `min(total, current + radius)`, inclusive.
///
/// No wraparound: the window shrinks near the boundaries and is empty when
/// the bounds cross.
pub fn page_window(current_page: u32, total_pages: u32, radius: u32) -> Vec<u32> {
    let start = current_page.saturating_sub(radius).max(1);
    let end = total_pages.min(current_page.saturating_add(radius));
    (start..=end).collect()
}

/// Pager rendering inputs: bounded window plus prev/next enablement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    pub current_page: u32,
    pub total_pages: u32,
    /// Bounded window of page-number buttons around the current page.
    pub window: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    /// The buttons disable on exact equality with the bounds, so an
    /// out-of-range current page leaves both enabled.
    pub fn for_page(current_page: u32, total_pages: u32) -> Self {
        Self {
            window: page_window(current_page, total_pages, WINDOW_RADIUS),
            prev_enabled: current_page != 1,
            next_enabled: current_page != total_pages,
            current_page,
            total_pages,
        }
    }
}
