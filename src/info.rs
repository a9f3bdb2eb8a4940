//! info.rs
//! Lazily computed audio stream properties.

use std::cell::OnceCell;
use std::path::Path;

use lofty::FileProperties;

use crate::error::{Result, SongError};

/// Derived stream values, each computed at most once per handle.
///
/// A cell is filled from the container's stream descriptors on first
/// access; every later access returns the stored value without touching
/// the container again.
#[derive(Debug, Default)]
pub(crate) struct StreamProps {
    duration: OnceCell<f64>,
    sample_rate: OnceCell<u32>,
    channels: OnceCell<u16>,
}

impl StreamProps {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Duration of the audio stream in seconds.
    pub(crate) fn duration(&self, props: &FileProperties, path: &Path) -> Result<f64> {
        if let Some(d) = self.duration.get() {
            return Ok(*d);
        }
        // A container without a sample rate has no audio stream, and no
        // meaningful duration either.
        if props.sample_rate().is_none() {
            return Err(SongError::NoMedia(path.to_path_buf()));
        }
        Ok(*self
            .duration
            .get_or_init(|| props.duration().as_secs_f64()))
    }

    /// Sample rate of the audio stream in Hz.
    pub(crate) fn sample_rate(&self, props: &FileProperties, path: &Path) -> Result<u32> {
        if let Some(rate) = self.sample_rate.get() {
            return Ok(*rate);
        }
        let rate = props
            .sample_rate()
            .ok_or_else(|| SongError::NoMedia(path.to_path_buf()))?;
        Ok(*self.sample_rate.get_or_init(|| rate))
    }

    /// Number of audio channels.
    pub(crate) fn channels(&self, props: &FileProperties, path: &Path) -> Result<u16> {
        if let Some(n) = self.channels.get() {
            return Ok(*n);
        }
        let n = props
            .channels()
            .ok_or_else(|| SongError::NoMedia(path.to_path_buf()))?;
        Ok(*self.channels.get_or_init(|| u16::from(n)))
    }
}
