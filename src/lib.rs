//! songfile
//!
//! Open an audio file, read and edit its metadata tags as an ordered,
//! case-insensitive mapping, inspect its stream properties, save it back
//! without touching the audio data, and play it through the default output
//! device.
//!
//! ```rust,no_run
//! use songfile::Song;
//!
//! # fn main() -> songfile::Result<()> {
//! let mut song = Song::open("test.flac")?;
//!
//! // Tags behave like an ordered, case-insensitive map.
//! assert_eq!(song.get("artist")?, song.get("ARTIST")?);
//! song.set("track", 5);
//!
//! // Derived stream properties are computed once and cached.
//! println!("{:.3}s @ {} Hz", song.duration()?, song.sample_rate()?);
//!
//! // Persist the edited tags; the audio stream is reused as-is.
//! song.save_as("copy.flac")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
mod info;
pub mod playback;
mod song;
mod tags;

pub use error::{Result, SongError};
pub use playback::SampleStream;
pub use song::Song;
pub use tags::{Keys, TagIndex};
