//! Fixed sidebar category set.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use devportal_core::DomainError;

/// Sidebar category filter.
///
/// Selection is UI state only: choosing a category does not narrow the
/// product list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "All Products")]
    AllProducts,
    #[serde(rename = "Featured Use Cases")]
    FeaturedUseCases,
    #[serde(rename = "Product API")]
    ProductApi,
    #[serde(rename = "Cross Cutting")]
    CrossCutting,
}

impl Category {
    /// Every category, in sidebar order.
    pub const ALL: [Category; 4] = [
        Category::AllProducts,
        Category::FeaturedUseCases,
        Category::ProductApi,
        Category::CrossCutting,
    ];

    /// The label shown on the sidebar button.
    pub fn label(self) -> &'static str {
        match self {
            Category::AllProducts => "All Products",
            Category::FeaturedUseCases => "Featured Use Cases",
            Category::ProductApi => "Product API",
            Category::CrossCutting => "Cross Cutting",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::AllProducts
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::unknown_category(s))
    }
}
