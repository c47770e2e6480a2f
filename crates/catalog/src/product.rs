use serde::{Deserialize, Serialize};

use devportal_core::{DomainError, DomainResult, ValueObject};

/// Star rating on the portal's `0.0..=5.0` scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    pub fn new(value: f32) -> DomainResult<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be within {}..={}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl ValueObject for Rating {}

impl TryFrom<f32> for Rating {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Catalog entry shown on the portal listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub rating: Rating,
    pub votes: u32,
    pub description: String,
    /// Flagged for prioritized display within the currently visible page.
    #[serde(default)]
    pub is_top_pick: bool,
}

impl Product {
    /// Build a product. Top-pick flagging is opt-in via [`Product::top_pick`].
    pub fn new(
        title: impl Into<String>,
        rating: Rating,
        votes: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            votes,
            description: description.into(),
            is_top_pick: false,
        }
    }

    /// Flag the product for prioritized display.
    pub fn top_pick(mut self) -> Self {
        self.is_top_pick = true;
        self
    }
}
