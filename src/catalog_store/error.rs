use thiserror::Error;

/// Errors returned by catalog store operations.
///
/// All of these are deterministic business-rule violations detected before
/// any mutation happens, so a failed operation never leaves partial state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User with mobile {0} does not exist")]
    UserNotFound(String),

    #[error("Album {0} does not exist")]
    AlbumNotFound(String),

    #[error("Playlist {0} does not exist")]
    PlaylistNotFound(String),

    #[error("Song {0} does not exist")]
    SongNotFound(String),
}
