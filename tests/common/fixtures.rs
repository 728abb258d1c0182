//! Test store fixtures.

use super::constants::*;
use strimpellify_catalog::CatalogStore;

/// Build a store with two users, two artists, three albums and four songs.
pub fn create_test_store() -> CatalogStore {
    let mut store = CatalogStore::new();

    store.create_user("John", JOHN_MOBILE);
    store.create_user("Jane", JANE_MOBILE);

    store.create_album(ALBUM_DIVIDE, ARTIST_ED);
    store.create_album(ALBUM_MULTIPLY, ARTIST_ED);
    store.create_album(ALBUM_RAM, ARTIST_DAFT_PUNK);

    store
        .create_song(SONG_SHAPE_OF_YOU, ALBUM_DIVIDE, SHAPE_OF_YOU_SECS)
        .expect("seed album exists");
    store
        .create_song(SONG_PERFECT, ALBUM_DIVIDE, PERFECT_SECS)
        .expect("seed album exists");
    store
        .create_song(SONG_SING, ALBUM_MULTIPLY, SING_SECS)
        .expect("seed album exists");
    store
        .create_song(SONG_GET_LUCKY, ALBUM_RAM, GET_LUCKY_SECS)
        .expect("seed album exists");

    store
}
