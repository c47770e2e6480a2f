//! Transient UI state for the portal listing screen.

use serde::{Deserialize, Serialize};

use devportal_catalog::Category;
use devportal_core::StateMachine;

/// The screen's selection state.
///
/// Category and search query are selection state only; neither narrows the
/// product list (see [`crate::view::portal_view`]). The state lives for the
/// lifetime of the screen; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalState {
    pub selected_category: Category,
    pub search_query: String,
    /// 1-based. Stored verbatim; out-of-range values render as an empty page.
    pub current_page: u32,
}

/// State-changing events originating from user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    SelectCategory(Category),
    SetSearchQuery(String),
    GoToPage(u32),
}

impl PortalState {
    /// State of a freshly opened screen.
    pub fn initial() -> Self {
        Self {
            selected_category: Category::AllProducts,
            search_query: String::new(),
            current_page: 1,
        }
    }

    pub fn select_category(&self, category: Category) -> Self {
        self.apply(&Transition::SelectCategory(category))
    }

    pub fn set_search_query(&self, query: impl Into<String>) -> Self {
        self.apply(&Transition::SetSearchQuery(query.into()))
    }

    pub fn go_to_page(&self, page: u32) -> Self {
        self.apply(&Transition::GoToPage(page))
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::initial()
    }
}

impl StateMachine for PortalState {
    type Transition = Transition;

    fn apply(&self, transition: &Transition) -> Self {
        let mut next = self.clone();
        match transition {
            Transition::SelectCategory(category) => next.selected_category = *category,
            Transition::SetSearchQuery(query) => next.search_query = query.clone(),
            // Stored verbatim; the view renders out-of-range pages as empty.
            Transition::GoToPage(page) => next.current_page = *page,
        }
        tracing::debug!(?transition, "portal state transition");
        next
    }
}
