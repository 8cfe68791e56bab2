pub mod song_source;

pub use song_source::{SongSource, SourceError};
