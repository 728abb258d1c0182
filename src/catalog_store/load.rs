//! Seed-file loading.
//!
//! Builds a populated store from a JSON seed describing users, albums and
//! songs, replaying the regular create operations so every relation and
//! counter invariant holds on the loaded store.

use super::CatalogStore;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub users: Vec<UserSeed>,
    #[serde(default)]
    pub albums: Vec<AlbumSeed>,
    #[serde(default)]
    pub songs: Vec<SongSeed>,
}

#[derive(Debug, Deserialize)]
pub struct UserSeed {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Deserialize)]
pub struct AlbumSeed {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Deserialize)]
pub struct SongSeed {
    pub title: String,
    pub album: String,
    pub length_secs: u32,
}

impl CatalogSeed {
    /// Replay the seed through the store's create operations. Albums are
    /// created before songs, so a song may reference any album of the seed
    /// regardless of declaration order.
    pub fn build(&self) -> Result<CatalogStore> {
        let mut store = CatalogStore::new();
        for user in &self.users {
            store.create_user(&user.name, &user.mobile);
        }
        for album in &self.albums {
            store.create_album(&album.title, &album.artist);
        }
        for song in &self.songs {
            store
                .create_song(&song.title, &song.album, song.length_secs)
                .with_context(|| {
                    format!("Seed song \"{}\" references an unknown album", song.title)
                })?;
        }
        Ok(store)
    }
}

pub fn load_catalog_store<P: AsRef<Path>>(path: P) -> Result<CatalogStore> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed: CatalogSeed = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    let store = seed.build()?;
    info!(
        "Catalog has:\n{} artists\n{} albums\n{} songs\n{} users",
        store.artists_count(),
        store.albums_count(),
        store.songs_count(),
        store.users_count()
    );
    Ok(store)
}
