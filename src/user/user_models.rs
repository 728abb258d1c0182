use serde::{Deserialize, Serialize};

/// User entity. The mobile identifier is the natural key used by lookups;
/// duplicate mobiles are tolerated at creation and lookups return the first
/// match in insertion order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: usize,
    pub name: String,
    pub mobile: String,
}

/// Playlist entity. Created by exactly one user; its song set is fixed at
/// creation time, while its listener set grows through access operations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub creator_id: usize,
}
