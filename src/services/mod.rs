//! Service layer
//!
//! Logic that combines models, kept apart from storage and presentation.

pub mod category_sync;

pub use category_sync::{merge, needs_refresh, CategoryDiff};
