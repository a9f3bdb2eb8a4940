//! error.rs
//! Everything that can go wrong with a [`Song`](crate::Song).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`SongError`].
pub type Result<T> = std::result::Result<T, SongError>;

/// Errors raised by [`Song`](crate::Song) operations.
///
/// Every failure surfaces synchronously at the call that triggered it and
/// carries the offending path where there is one. Nothing is retried
/// internally: a bad path, an unreadable container or a busy output device
/// will not become valid on their own.
#[derive(Error, Debug)]
pub enum SongError {
    /// The target path does not exist. Raised when opening, and when saving
    /// into a directory that is missing.
    #[error("no such file or directory: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The path names a directory where an audio file was expected.
    #[error("is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    /// The path exists but holds no recognizable audio.
    #[error("no decodable audio: {}", .0.display())]
    NoMedia(PathBuf),

    /// An empty path was given where a file path is required.
    #[error("a file path is required")]
    MissingPath,

    /// [`Song::init`](crate::Song::init) was called on a handle that is
    /// already open.
    #[error("this song has already been initialized")]
    AlreadyInitialized,

    /// Tag lookup or removal on a key that is not in the index.
    ///
    /// The message text is part of the contract; callers match on it.
    #[error("Metadata not found")]
    MetadataNotFound,

    /// The output device could not be opened, or the stream failed.
    #[error("playback failed: {0}")]
    Playback(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tags(#[from] lofty::error::LoftyError),
}
