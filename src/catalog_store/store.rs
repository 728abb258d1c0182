//! The in-memory catalog store.
//!
//! Owns every entity collection and every relation map, and keeps them
//! consistent across mutations. Entities are created by the store and handed
//! out as clones; callers never mutate them in place.

use super::StoreError;
use crate::catalog::{Album, Artist, Song};
use crate::user::{Playlist, User};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Normalized form of a natural key: trimmed, case-folded.
fn normalized(s: &str) -> String {
    s.trim().to_lowercase()
}

/// In-memory catalog and social graph.
///
/// Entity vectors preserve insertion order, which drives every
/// "first match wins" lookup and the tie-breaks of the popularity queries.
/// Relation maps are adjacency lists keyed by the owning entity's id.
#[derive(Debug, Default)]
pub struct CatalogStore {
    users: Vec<User>,
    artists: Vec<Artist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,

    artist_albums: HashMap<String, Vec<String>>,
    album_songs: HashMap<String, Vec<String>>,
    playlist_songs: HashMap<String, Vec<String>>,
    playlist_listeners: HashMap<String, Vec<usize>>,
    current_playlists: HashMap<usize, String>,
    user_playlists: HashMap<usize, Vec<String>>,
    song_likers: HashMap<String, Vec<usize>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Entity creation
    // =========================================================================

    /// Create a new user. No uniqueness check is applied to the mobile:
    /// duplicates are tolerated and lookups resolve the first match.
    pub fn create_user(&mut self, name: &str, mobile: &str) -> User {
        let user = User {
            id: self.users.len(),
            name: name.to_owned(),
            mobile: mobile.to_owned(),
        };
        self.users.push(user.clone());
        debug!("Created user {} ({})", user.name, user.mobile);
        user
    }

    /// Create a new artist. Always creates a fresh record, even when an
    /// artist with the same name already exists; only the album creation
    /// path reuses existing artists (see [`Self::create_album`]).
    pub fn create_artist(&mut self, name: &str) -> Artist {
        let artist = Artist {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_owned(),
            likes: 0,
        };
        self.artists.push(artist.clone());
        debug!("Created artist {}", artist.name);
        artist
    }

    fn find_or_create_artist(&mut self, name: &str) -> String {
        match self.find_artist_by_name(name) {
            Some(artist) => artist.id,
            None => self.create_artist(name).id,
        }
    }

    /// Create a new album under the named artist, reusing an existing artist
    /// with a matching name or creating one on the fly. Album titles are not
    /// deduplicated.
    pub fn create_album(&mut self, title: &str, artist_name: &str) -> Album {
        let artist_id = self.find_or_create_artist(artist_name);
        let album = Album {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_owned(),
        };
        self.artist_albums
            .entry(artist_id)
            .or_default()
            .push(album.id.clone());
        self.albums.push(album.clone());
        debug!("Created album {}", album.title);
        album
    }

    /// Create a new song on the album with the given title. The album is
    /// resolved across the whole catalog, not scoped to an artist.
    pub fn create_song(
        &mut self,
        title: &str,
        album_title: &str,
        length_secs: u32,
    ) -> Result<Song, StoreError> {
        let album_id = self
            .find_album_by_title(album_title)
            .map(|album| album.id)
            .ok_or_else(|| StoreError::AlbumNotFound(album_title.trim().to_owned()))?;

        let song = Song {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_owned(),
            length_secs,
            likes: 0,
        };
        self.album_songs
            .entry(album_id)
            .or_default()
            .push(song.id.clone());
        self.songs.push(song.clone());
        debug!("Created song {} ({}s)", song.title, song.length_secs);
        Ok(song)
    }

    // =========================================================================
    // Playlist operations
    // =========================================================================

    /// Create a playlist containing every song in the catalog whose length
    /// equals `length_secs`, across all albums and artists.
    pub fn create_playlist_by_length(
        &mut self,
        mobile: &str,
        title: &str,
        length_secs: u32,
    ) -> Result<Playlist, StoreError> {
        let creator_id = self.resolve_user(mobile)?;
        let song_ids = self
            .songs
            .iter()
            .filter(|song| song.length_secs == length_secs)
            .map(|song| song.id.clone())
            .collect();
        Ok(self.register_playlist(title, creator_id, song_ids))
    }

    /// Create a playlist from a list of requested song titles. Every catalog
    /// song matching a requested title is included, duplicates across albums
    /// and all; a title with no match contributes nothing.
    pub fn create_playlist_by_titles<S: AsRef<str>>(
        &mut self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> Result<Playlist, StoreError> {
        let creator_id = self.resolve_user(mobile)?;
        let mut song_ids = Vec::new();
        for requested in song_titles {
            let wanted = normalized(requested.as_ref());
            for song in &self.songs {
                if normalized(&song.title) == wanted {
                    song_ids.push(song.id.clone());
                }
            }
        }
        Ok(self.register_playlist(title, creator_id, song_ids))
    }

    /// Shared playlist bookkeeping: the creator starts as the only listener,
    /// the playlist becomes the creator's "current" one, and it lands in the
    /// creator's accessible list.
    fn register_playlist(
        &mut self,
        title: &str,
        creator_id: usize,
        song_ids: Vec<String>,
    ) -> Playlist {
        let playlist = Playlist {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_owned(),
            creator_id,
        };
        debug!(
            "Created playlist {} with {} songs",
            playlist.title,
            song_ids.len()
        );
        self.playlist_songs.insert(playlist.id.clone(), song_ids);
        self.playlist_listeners
            .insert(playlist.id.clone(), vec![creator_id]);
        self.current_playlists
            .insert(creator_id, playlist.id.clone());
        self.user_playlists
            .entry(creator_id)
            .or_default()
            .push(playlist.id.clone());
        self.playlists.push(playlist.clone());
        playlist
    }

    /// Open a playlist for the given user, registering them as a listener on
    /// first access. Repeat calls are no-ops for an already-registered
    /// listener; the playlist is returned either way.
    pub fn access_playlist(
        &mut self,
        mobile: &str,
        playlist_title: &str,
    ) -> Result<Playlist, StoreError> {
        let user_id = self.resolve_user(mobile)?;
        let playlist = self
            .find_playlist_by_title(playlist_title)
            .ok_or_else(|| StoreError::PlaylistNotFound(playlist_title.trim().to_owned()))?;

        let listeners = self
            .playlist_listeners
            .entry(playlist.id.clone())
            .or_default();
        if !listeners.contains(&user_id) {
            listeners.push(user_id);
            self.user_playlists
                .entry(user_id)
                .or_default()
                .push(playlist.id.clone());
            debug!(
                "User {} now listens to playlist {}",
                user_id, playlist.title
            );
        }
        Ok(playlist)
    }

    // =========================================================================
    // Social signals
    // =========================================================================

    /// Like the first song whose title matches. A first-time like by a user
    /// bumps the song's counter, records the user in the likers set, and
    /// credits one like to the first artist whose album chain contains the
    /// song. A repeat like by the same user leaves every counter untouched
    /// and returns the song unchanged.
    pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, StoreError> {
        let user_id = self.resolve_user(mobile)?;
        let wanted = normalized(song_title);
        let song_index = self
            .songs
            .iter()
            .position(|song| normalized(&song.title) == wanted)
            .ok_or_else(|| StoreError::SongNotFound(song_title.trim().to_owned()))?;

        let song_id = self.songs[song_index].id.clone();
        let already_liked = self
            .song_likers
            .get(&song_id)
            .is_some_and(|likers| likers.contains(&user_id));
        if already_liked {
            return Ok(self.songs[song_index].clone());
        }

        let artist_index = self.artist_index_of_song(&song_id);
        self.song_likers.entry(song_id).or_default().push(user_id);
        self.songs[song_index].likes += 1;
        if let Some(artist_index) = artist_index {
            self.artists[artist_index].likes += 1;
        }
        debug!(
            "User {} liked song {}",
            user_id, self.songs[song_index].title
        );
        Ok(self.songs[song_index].clone())
    }

    /// First artist, in insertion order, whose album chain contains the song.
    /// Single attribution: the scan stops at the first hit.
    fn artist_index_of_song(&self, song_id: &str) -> Option<usize> {
        self.artists.iter().position(|artist| {
            self.artist_albums
                .get(&artist.id)
                .is_some_and(|album_ids| {
                    album_ids.iter().any(|album_id| {
                        self.album_songs
                            .get(album_id)
                            .is_some_and(|song_ids| song_ids.iter().any(|id| id == song_id))
                    })
                })
        })
    }

    /// Title of the song with the strictly greatest like counter. Ties keep
    /// the first-encountered song; an empty catalog yields `None`.
    pub fn most_popular_song(&self) -> Option<String> {
        let mut most_popular: Option<&Song> = None;
        for song in &self.songs {
            if most_popular.is_none_or(|best| song.likes > best.likes) {
                most_popular = Some(song);
            }
        }
        most_popular.map(|song| song.title.clone())
    }

    /// Name of the artist with the strictly greatest like counter, with the
    /// same tie-break policy as [`Self::most_popular_song`].
    pub fn most_popular_artist(&self) -> Option<String> {
        let mut most_popular: Option<&Artist> = None;
        for artist in &self.artists {
            if most_popular.is_none_or(|best| artist.likes > best.likes) {
                most_popular = Some(artist);
            }
        }
        most_popular.map(|artist| artist.name.clone())
    }

    // =========================================================================
    // Natural-key lookups
    // =========================================================================

    fn resolve_user(&self, mobile: &str) -> Result<usize, StoreError> {
        self.find_user_by_mobile(mobile)
            .map(|user| user.id)
            .ok_or_else(|| StoreError::UserNotFound(mobile.trim().to_owned()))
    }

    /// First user, in insertion order, whose mobile matches.
    pub fn find_user_by_mobile(&self, mobile: &str) -> Option<User> {
        let wanted = normalized(mobile);
        self.users
            .iter()
            .find(|user| normalized(&user.mobile) == wanted)
            .cloned()
    }

    /// First artist, in insertion order, whose name matches.
    pub fn find_artist_by_name(&self, name: &str) -> Option<Artist> {
        let wanted = normalized(name);
        self.artists
            .iter()
            .find(|artist| normalized(&artist.name) == wanted)
            .cloned()
    }

    /// First album, in insertion order, whose title matches.
    pub fn find_album_by_title(&self, title: &str) -> Option<Album> {
        let wanted = normalized(title);
        self.albums
            .iter()
            .find(|album| normalized(&album.title) == wanted)
            .cloned()
    }

    /// First song, in insertion order, whose title matches.
    pub fn find_song_by_title(&self, title: &str) -> Option<Song> {
        let wanted = normalized(title);
        self.songs
            .iter()
            .find(|song| normalized(&song.title) == wanted)
            .cloned()
    }

    /// First playlist, in insertion order, whose title matches.
    pub fn find_playlist_by_title(&self, title: &str) -> Option<Playlist> {
        let wanted = normalized(title);
        self.playlists
            .iter()
            .find(|playlist| normalized(&playlist.title) == wanted)
            .cloned()
    }

    // =========================================================================
    // Id lookups and relation projections
    // =========================================================================

    pub fn get_user(&self, user_id: usize) -> Option<User> {
        self.users.get(user_id).cloned()
    }

    pub fn get_artist(&self, artist_id: &str) -> Option<Artist> {
        self.artists
            .iter()
            .find(|artist| artist.id == artist_id)
            .cloned()
    }

    pub fn get_album(&self, album_id: &str) -> Option<Album> {
        self.albums
            .iter()
            .find(|album| album.id == album_id)
            .cloned()
    }

    pub fn get_song(&self, song_id: &str) -> Option<Song> {
        self.songs.iter().find(|song| song.id == song_id).cloned()
    }

    pub fn get_playlist(&self, playlist_id: &str) -> Option<Playlist> {
        self.playlists
            .iter()
            .find(|playlist| playlist.id == playlist_id)
            .cloned()
    }

    pub fn albums_of_artist(&self, artist_id: &str) -> Vec<Album> {
        resolve_ids(self.artist_albums.get(artist_id), |id| self.get_album(id))
    }

    pub fn songs_of_album(&self, album_id: &str) -> Vec<Song> {
        resolve_ids(self.album_songs.get(album_id), |id| self.get_song(id))
    }

    pub fn songs_of_playlist(&self, playlist_id: &str) -> Vec<Song> {
        resolve_ids(self.playlist_songs.get(playlist_id), |id| self.get_song(id))
    }

    pub fn listeners_of_playlist(&self, playlist_id: &str) -> Vec<User> {
        self.playlist_listeners
            .get(playlist_id)
            .map(|user_ids| {
                user_ids
                    .iter()
                    .filter_map(|user_id| self.get_user(*user_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn playlists_of_user(&self, user_id: usize) -> Vec<Playlist> {
        resolve_ids(self.user_playlists.get(&user_id), |id| self.get_playlist(id))
    }

    pub fn likers_of_song(&self, song_id: &str) -> Vec<User> {
        self.song_likers
            .get(song_id)
            .map(|user_ids| {
                user_ids
                    .iter()
                    .filter_map(|user_id| self.get_user(*user_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The most recently created playlist of the given creator, if any.
    pub fn current_playlist_of(&self, user_id: usize) -> Option<Playlist> {
        self.current_playlists
            .get(&user_id)
            .and_then(|playlist_id| self.get_playlist(playlist_id))
    }

    // =========================================================================
    // Counts (for metrics)
    // =========================================================================

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    pub fn artists_count(&self) -> usize {
        self.artists.len()
    }

    pub fn albums_count(&self) -> usize {
        self.albums.len()
    }

    pub fn songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn playlists_count(&self) -> usize {
        self.playlists.len()
    }
}

fn resolve_ids<T>(ids: Option<&Vec<String>>, resolve: impl Fn(&str) -> Option<T>) -> Vec<T> {
    ids.map(|ids| ids.iter().filter_map(|id| resolve(id)).collect())
        .unwrap_or_default()
}
