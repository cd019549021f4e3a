//! Review module - Read-only summary of everything entered so far.
//!
//! - `summary` - Section/item types and `build_review`

mod summary;

pub use summary::{build_review, ReviewItem, ReviewSection, NOT_PROVIDED};
