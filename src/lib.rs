//! Strimpellify Catalog Library
//!
//! In-memory music catalog and social graph: artists, albums, songs, users
//! and playlists, plus the derived popularity signals. The crate exposes the
//! store and its entity models for embedding in a server or adapter layer.

pub mod catalog;
pub mod catalog_store;
pub mod user;

// Re-export commonly used types for convenience
pub use catalog::{Album, Artist, Song};
pub use catalog_store::{load_catalog_store, CatalogStore, SharedCatalogStore, StoreError};
pub use user::{Playlist, User};
