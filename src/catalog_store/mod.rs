mod error;
mod load;
mod store;

pub use error::StoreError;
pub use load::{load_catalog_store, AlbumSeed, CatalogSeed, SongSeed, UserSeed};
pub use store::CatalogStore;

use std::sync::{Arc, Mutex};

/// Store handle for concurrent hosts. Every operation, mutating and read-only
/// alike, runs behind the one lock: relation updates are multi-step
/// read-modify-write sequences that must not interleave.
pub type SharedCatalogStore = Arc<Mutex<CatalogStore>>;
