//! `devportal-view` — the catalog view-model.
//!
//! Computes which products are visible for the current UI state, and exposes
//! the pager and star-row inputs a renderer needs. All of it is pure,
//! synchronous, and driven by user-interaction transitions.

pub mod paging;
pub mod stars;
pub mod state;
pub mod view;

pub use paging::{
    PRODUCTS_PER_PAGE, PageControls, PageSize, WINDOW_RADIUS, page_window, total_pages,
    visible_page,
};
pub use state::{PortalState, Transition};
pub use stars::{STAR_COUNT, rating_caption, star_fill};
pub use view::{PortalView, portal_view, top_picks_of};
