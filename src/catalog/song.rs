use serde::{Deserialize, Serialize};

/// Song entity.
///
/// Titles are not unique: several songs may carry the same title across
/// different albums. The like counter always equals the size of the song's
/// likers set in the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub length_secs: u32,
    pub likes: u64,
}
