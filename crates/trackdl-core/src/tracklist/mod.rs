//! Playlist CSV reader.
//!
//! Parses a spreadsheet export (header row + one row per track) into ordered
//! [`Record`]s. Only the `Track Name` and `Artist Name(s)` columns are read;
//! every other column is ignored. The header is checked when the file is
//! opened, so a missing column is reported before any row is handed out.

mod error;
mod reader;
mod record;

pub use error::TracklistError;
pub use reader::{Records, TrackReader, ARTIST_COLUMN, TRACK_COLUMN};
pub use record::Record;
