mod album;
mod entry;
mod track;

pub use album::{Album, AlbumId, AlbumInfo, AlbumMetadata, NO_DESCRIPTION};
pub use entry::{entry_name, is_listing_control, is_playable};
pub use track::{Track, TrackId};
