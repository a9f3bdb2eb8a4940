//! playback/
//! Decode a file and drive it through the audio output device.

mod decoder;

pub use decoder::SampleStream;

use std::path::Path;

use rodio::{OutputStreamBuilder, Sink, Source};

use crate::error::{Result, SongError};

/// Decode `path` and play it through the default output device, blocking
/// the calling thread until the stream is drained.
pub(crate) fn play_file(path: &Path) -> Result<()> {
    let source = SampleStream::open(path)?;

    tracing::debug!(
        path = %path.display(),
        rate = source.sample_rate(),
        channels = source.channels(),
        "starting playback"
    );

    // The stream must stay alive for as long as anything is playing.
    let stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| SongError::Playback(format!("cannot open output device: {e}")))?;
    let sink = Sink::connect_new(stream.mixer());

    sink.append(source);
    sink.sleep_until_end();

    tracing::debug!(path = %path.display(), "playback finished");

    Ok(())
}
