//! `devportal-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no rendering or
//! infrastructure concerns).

pub mod error;
pub mod state;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use state::StateMachine;
pub use value_object::ValueObject;
