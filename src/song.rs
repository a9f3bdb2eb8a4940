//! song.rs
//! The audio-file handle.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lofty::{AudioFile, TaggedFile, TaggedFileExt};

use crate::error::{Result, SongError};
use crate::info::StreamProps;
use crate::playback;
use crate::tags::{self, Keys, TagIndex};

/// A handle to one audio file.
///
/// Opening a file reads its metadata tags into an ordered, case-insensitive
/// mapping and keeps the container around for derived stream properties,
/// saving and playback. The audio data itself is never re-encoded: saving
/// only rewrites metadata.
///
/// ```rust,no_run
/// use songfile::Song;
///
/// # fn main() -> songfile::Result<()> {
/// let mut song = Song::open("test.flac")?;
/// println!("{} by {}", song.get("title")?, song.get("artist")?);
/// song.set("track", 5);
/// song.save()?;
/// # Ok(())
/// # }
/// ```
pub struct Song {
    path: PathBuf,
    initialized: bool,
    container: Option<TaggedFile>,
    tags: TagIndex,
    props: StreamProps,
}

impl Song {
    /// Open the audio file at `path`.
    ///
    /// Fails with [`SongError::FileNotFound`] if the path does not exist,
    /// [`SongError::IsADirectory`] if it names a directory, and
    /// [`SongError::NoMedia`] if it exists but is not a recognizable audio
    /// container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut song = Self::closed();
        song.init(path)?;
        Ok(song)
    }

    /// The one-time initialization routine behind [`Song::open`].
    ///
    /// A handle opens exactly one file in its lifetime. Calling this on an
    /// already-open handle fails with [`SongError::AlreadyInitialized`]
    /// before the new argument is even looked at, so a valid path, a
    /// directory and a nonexistent path all report the same error.
    pub fn init(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if self.initialized {
            return Err(SongError::AlreadyInitialized);
        }

        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SongError::MissingPath);
        }

        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SongError::FileNotFound(path.to_path_buf()),
            _ => SongError::Io(e),
        })?;
        if meta.is_dir() {
            return Err(SongError::IsADirectory(path.to_path_buf()));
        }

        let container =
            lofty::read_from_path(path).map_err(|_| SongError::NoMedia(path.to_path_buf()))?;
        let tags = tags::read::index_from_container(&container);

        tracing::debug!(path = %path.display(), tags = tags.len(), "opened container");

        self.path = path.to_path_buf();
        self.container = Some(container);
        self.tags = tags;
        self.initialized = true;
        Ok(())
    }

    /// An empty handle waiting for [`Song::init`].
    fn closed() -> Self {
        Song {
            path: PathBuf::new(),
            initialized: false,
            container: None,
            tags: TagIndex::new(),
            props: StreamProps::new(),
        }
    }

    fn container(&self) -> &TaggedFile {
        // `open` is the only public constructor, so the handle is always
        // initialized by the time the container is needed.
        self.container.as_ref().expect("song is initialized")
    }

    /// The path this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the tag index.
    pub fn tags(&self) -> &TagIndex {
        &self.tags
    }

    /// Look up a tag value, case-insensitively.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.tags.get(key)
    }

    /// Set a tag. Non-string values are stored through their `Display`
    /// form; new keys are appended after the existing ones.
    pub fn set(&mut self, key: &str, value: impl fmt::Display) {
        self.tags.set(key, value);
    }

    /// Remove a tag entirely.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.tags.remove(key)
    }

    /// Case-insensitive membership test.
    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// Display keys in insertion order.
    pub fn keys(&self) -> Keys<'_> {
        self.tags.keys()
    }

    /// Number of live tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Duration of the audio stream in seconds. Computed once, then cached
    /// for the life of the handle.
    pub fn duration(&self) -> Result<f64> {
        self.props
            .duration(self.container().properties(), &self.path)
    }

    /// Sample rate in Hz. Computed once, then cached.
    pub fn sample_rate(&self) -> Result<u32> {
        self.props
            .sample_rate(self.container().properties(), &self.path)
    }

    /// Number of audio channels. Computed once, then cached.
    pub fn channels(&self) -> Result<u16> {
        self.props
            .channels(self.container().properties(), &self.path)
    }

    /// Rewrite the original file in place with the current tags.
    pub fn save(&self) -> Result<()> {
        self.write_to(None)
    }

    /// Write a new file at `filename`: same audio data, current tags. The
    /// original file is left untouched.
    ///
    /// Fails with [`SongError::FileNotFound`] when the target directory
    /// does not exist.
    pub fn save_as(&self, filename: impl AsRef<Path>) -> Result<()> {
        self.write_to(Some(filename.as_ref()))
    }

    fn write_to(&self, target: Option<&Path>) -> Result<()> {
        let container = self.container();
        let base = container.primary_tag().or_else(|| container.first_tag());
        let fallback = container.file_type().primary_tag_type();
        tags::write::write_index(&self.path, target, base, fallback, &self.tags)
    }

    /// Decode the audio stream and play it through the default output
    /// device. Blocks the calling thread until playback finishes; fails
    /// with [`SongError::Playback`] if the device cannot be opened.
    pub fn play(&self) -> Result<()> {
        playback::play_file(&self.path)
    }

    /// Every live tag as a `key -> value` line.
    pub fn pprint(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.tags.iter() {
            out.push_str(key);
            out.push_str(" -> ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Song({})", self.tags.render())
    }
}

impl fmt::Debug for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Song")
            .field("path", &self.path)
            .field("tags", &self.tags.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Song {
    type Item = &'a str;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Keys<'a> {
        self.keys()
    }
}
