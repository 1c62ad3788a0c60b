//! Typed preference store
//!
//! Layers enums, tri-state booleans and URIs over a backend that only knows
//! booleans, strings and 64-bit integers.
//!
//! # Example
//!
//! ```rust,ignore
//! use authenticator::preferences::{AppPreferences, TypedSettingsStore};
//! use authenticator::storage::JsonFileBackend;
//!
//! let store = TypedSettingsStore::new(JsonFileBackend::open(paths.preferences_file())?);
//! let prefs = AppPreferences::new(&store);
//! if prefs.first_launch()? {
//!     prefs.set_first_launch(false)?;
//! }
//! ```

pub mod app;
pub mod encoding;
pub mod keys;
pub mod store;
pub mod uri;

pub use app::AppPreferences;
pub use encoding::SettingEnum;
pub use store::TypedSettingsStore;
pub use uri::UriRef;
