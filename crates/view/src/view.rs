//! Per-frame assembly of the listing screen's derived view.

use serde::Serialize;

use devportal_catalog::{Catalog, Product};

use crate::paging::{PageControls, PageSize, total_pages, visible_page};
use crate::state::PortalState;

/// Everything the listing screen needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalView<'a> {
    /// The visible slice for the current page.
    pub visible: &'a [Product],
    /// Top picks within the visible slice, in original order.
    pub top_picks: Vec<&'a Product>,
    pub controls: PageControls,
}

/// Top picks within the visible slice — not the full catalog — with the
/// slice's order preserved.
pub fn top_picks_of(visible: &[Product]) -> Vec<&Product> {
    visible.iter().filter(|p| p.is_top_pick).collect()
}

/// Derive the frame for the current state.
///
/// Category and search query are selection state only; neither narrows the
/// product list.
pub fn portal_view<'a>(
    catalog: &'a Catalog,
    state: &PortalState,
    page_size: PageSize,
) -> PortalView<'a> {
    let visible = visible_page(catalog.products(), state.current_page, page_size);
    PortalView {
        visible,
        top_picks: top_picks_of(visible),
        controls: PageControls::for_page(state.current_page, total_pages(catalog.len(), page_size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devportal_catalog::seed::sample_catalog;

    fn catalog() -> Catalog {
        sample_catalog().expect("sample catalog")
    }

    fn titles<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn first_page_shows_the_whole_sample_catalog() {
        let catalog = catalog();
        let view = portal_view(&catalog, &PortalState::initial(), PageSize::default());
        assert_eq!(view.visible.len(), 6);
        assert_eq!(view.visible[0].title, "Corporate Payments");
        assert_eq!(view.visible[5].title, "Loans");
    }

    #[test]
    fn top_picks_come_from_the_visible_slice_in_order() {
        let catalog = catalog();
        let view = portal_view(&catalog, &PortalState::initial(), PageSize::default());
        assert_eq!(
            titles(&view.top_picks),
            ["Corporate Payments", "Corporate Collections", "UPI"]
        );
    }

    #[test]
    fn top_picks_ignore_products_outside_the_visible_slice() {
        // With a page size of 2 only the first two products are visible, so
        // "UPI" (third, also a top pick) must not appear.
        let catalog = catalog();
        let page_size = PageSize::new(2).expect("page size");
        let view = portal_view(&catalog, &PortalState::initial(), page_size);
        assert_eq!(titles(&view.top_picks), ["Corporate Payments", "Corporate Collections"]);
    }

    #[test]
    fn second_page_of_the_sample_catalog_is_empty() {
        let catalog = catalog();
        let state = PortalState::initial().go_to_page(2);
        let view = portal_view(&catalog, &state, PageSize::default());
        assert!(view.visible.is_empty());
        assert!(view.top_picks.is_empty());
    }

    #[test]
    fn page_zero_renders_empty_without_wraparound() {
        let catalog = catalog();
        let state = PortalState::initial().go_to_page(0);
        let view = portal_view(&catalog, &state, PageSize::default());
        assert!(view.visible.is_empty());
    }

    #[test]
    fn sample_catalog_pager_is_inert() {
        let catalog = catalog();
        let view = portal_view(&catalog, &PortalState::initial(), PageSize::default());
        assert_eq!(view.controls.total_pages, 1);
        assert_eq!(view.controls.window, vec![1]);
        assert!(!view.controls.prev_enabled);
        assert!(!view.controls.next_enabled);
    }

    #[test]
    fn category_and_search_do_not_narrow_the_view() {
        let catalog = catalog();
        let baseline = portal_view(&catalog, &PortalState::initial(), PageSize::default());

        for category in devportal_catalog::Category::ALL {
            let state = PortalState::initial().select_category(category);
            assert_eq!(portal_view(&catalog, &state, PageSize::default()), baseline);
        }

        let searched = PortalState::initial().set_search_query("UPI");
        assert_eq!(portal_view(&catalog, &searched, PageSize::default()), baseline);
    }

    #[test]
    fn reselecting_a_category_leaves_the_derived_view_unchanged() {
        let catalog = catalog();
        let once = PortalState::initial().select_category(devportal_catalog::Category::AllProducts);
        let twice = once.select_category(devportal_catalog::Category::AllProducts);
        assert_eq!(
            portal_view(&catalog, &once, PageSize::default()),
            portal_view(&catalog, &twice, PageSize::default())
        );
    }
}
