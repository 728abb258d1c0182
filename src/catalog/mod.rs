mod album;
mod artist;
mod song;

pub use album::Album;
pub use artist::Artist;
pub use song::Song;
