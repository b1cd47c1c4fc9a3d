//! Persistence module
//!
//! JSON-file storage for user preferences.

mod preference_store;

pub use preference_store::JsonPreferenceStore;
