//! Data models shared between the phone and its wearable companion

pub mod category;
pub mod ids;

pub use category::{CategoryEquivalence, CategoryRecord};
pub use ids::CategoryId;
