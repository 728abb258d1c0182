use serde::{Deserialize, Serialize};

/// Artist entity.
///
/// The like counter is derived: it grows by one for every first-time like of
/// a song attributed to this artist, and never decreases.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub likes: u64,
}
