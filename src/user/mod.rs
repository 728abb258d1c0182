mod user_models;

pub use user_models::{Playlist, User};
