//! Domain layer - Business logic and domain models

pub mod quote;

pub use quote::{Quote, QuoteField};
