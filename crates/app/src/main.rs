//! Scripted walkthrough of the portal listing screen.
//!
//! Seeds the sample catalog, drives the view-model through a short sequence
//! of user interactions, and prints each derived frame as plain text.

use anyhow::Result;

use devportal_catalog::seed::sample_catalog;
use devportal_catalog::{Category, Product};
use devportal_core::StateMachine;
use devportal_view::{
    PageSize, PortalState, PortalView, Transition, portal_view, rating_caption, star_fill,
};

fn star_row(product: &Product) -> String {
    star_fill(product.rating, None)
        .iter()
        .map(|filled| if *filled { '*' } else { '.' })
        .collect()
}

fn render_card(product: &Product) -> String {
    let pick = if product.is_top_pick { " [Top Pick]" } else { "" };
    format!(
        "  {}{pick}\n    {} {}\n    {}",
        product.title,
        star_row(product),
        rating_caption(product.rating, product.votes),
        product.description,
    )
}

fn render_frame(state: &PortalState, view: &PortalView<'_>) -> String {
    let mut out = String::new();

    let categories = Category::ALL
        .iter()
        .map(|c| {
            if *c == state.selected_category {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("Categories: {categories}\n"));
    out.push_str(&format!("Search: {:?}\n", state.search_query));

    out.push_str("\nCustomer Top Picks\n");
    if view.top_picks.is_empty() {
        out.push_str("  (none on this page)\n");
    }
    for product in view.top_picks.iter().copied() {
        out.push_str(&render_card(product));
        out.push('\n');
    }

    out.push_str("\nAll Products\n");
    if view.visible.is_empty() {
        out.push_str("  (no products on this page)\n");
    }
    for product in view.visible {
        out.push_str(&render_card(product));
        out.push('\n');
    }

    let pager = view
        .controls
        .window
        .iter()
        .map(|page| {
            if *page == view.controls.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let prev = if view.controls.prev_enabled { "<" } else { " " };
    let next = if view.controls.next_enabled { ">" } else { " " };
    out.push_str(&format!("\nPages: {prev} {pager} {next}\n"));

    out
}

fn main() -> Result<()> {
    devportal_observability::init();

    let catalog = sample_catalog()?;
    let page_size = PageSize::default();
    tracing::info!(products = catalog.len(), "seeded sample catalog");

    let mut state = PortalState::initial();

    let script = [
        Transition::SelectCategory(Category::ProductApi),
        Transition::SetSearchQuery("payments".to_string()),
        Transition::GoToPage(2),
        Transition::GoToPage(1),
    ];

    println!("== API Developer Portal ==\n");
    println!("{}", render_frame(&state, &portal_view(&catalog, &state, page_size)));

    for transition in script {
        tracing::info!(?transition, "applying");
        state = state.apply(&transition);
        println!("{}", render_frame(&state, &portal_view(&catalog, &state, page_size)));
    }

    Ok(())
}
