//! Names and natural keys of the seeded test catalog.

pub const JOHN_MOBILE: &str = "123456789";
pub const JANE_MOBILE: &str = "987654321";

pub const ARTIST_ED: &str = "Ed Sheeran";
pub const ARTIST_DAFT_PUNK: &str = "Daft Punk";

pub const ALBUM_DIVIDE: &str = "Divide";
pub const ALBUM_MULTIPLY: &str = "Multiply";
pub const ALBUM_RAM: &str = "Random Access Memories";

pub const SONG_SHAPE_OF_YOU: &str = "Shape of You";
pub const SONG_PERFECT: &str = "Perfect";
pub const SONG_SING: &str = "Sing";
pub const SONG_GET_LUCKY: &str = "Get Lucky";

pub const SHAPE_OF_YOU_SECS: u32 = 233;
pub const PERFECT_SECS: u32 = 263;
pub const SING_SECS: u32 = 234;
pub const GET_LUCKY_SECS: u32 = 369;
