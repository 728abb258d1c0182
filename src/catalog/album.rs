use serde::{Deserialize, Serialize};

/// Album entity. Belongs to exactly one artist via the store's
/// artist-to-albums relation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub title: String,
}
