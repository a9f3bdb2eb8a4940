//! Shared fixtures: synthesized audio files for the black-box tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SAMPLE_RATE: u32 = 44_100;
pub const CHANNELS: u16 = 2;

/// The tag set used by the round-trip and lookup tests.
pub const REFERENCE_TAGS: [(&str, &str); 9] = [
    ("track", "4"),
    ("title", "Megascorcher"),
    ("artist", "Machinae Supremacy"),
    ("album", "Jets'n'Guns"),
    ("album artist", "Machinae Supremacy"),
    ("album_artist", "Machinae Supremacy"),
    ("disc", "1"),
    ("date", "2004"),
    ("genre", "SID Metal"),
];

/// Write a PCM WAV file (16-bit, stereo, 44.1 kHz) lasting `seconds`.
/// A quiet 440 Hz tone, so decoders get real signal to chew on.
pub fn write_wav(path: &Path, seconds: f64) {
    let frames = (seconds * f64::from(SAMPLE_RATE)).round() as u32;
    let data_len = frames * u32::from(CHANNELS) * 2;
    let byte_rate = SAMPLE_RATE * u32::from(CHANNELS) * 2;

    let mut w = BufWriter::new(File::create(path).expect("create wav fixture"));
    w.write_all(b"RIFF").unwrap();
    w.write_all(&(36 + data_len).to_le_bytes()).unwrap();
    w.write_all(b"WAVE").unwrap();

    w.write_all(b"fmt ").unwrap();
    w.write_all(&16u32.to_le_bytes()).unwrap();
    w.write_all(&1u16.to_le_bytes()).unwrap(); // PCM
    w.write_all(&CHANNELS.to_le_bytes()).unwrap();
    w.write_all(&SAMPLE_RATE.to_le_bytes()).unwrap();
    w.write_all(&byte_rate.to_le_bytes()).unwrap();
    w.write_all(&(CHANNELS * 2).to_le_bytes()).unwrap(); // block align
    w.write_all(&16u16.to_le_bytes()).unwrap(); // bits per sample

    w.write_all(b"data").unwrap();
    w.write_all(&data_len.to_le_bytes()).unwrap();
    for i in 0..frames {
        let t = f64::from(i) / f64::from(SAMPLE_RATE);
        let sample = ((t * 440.0 * std::f64::consts::TAU).sin() * 8000.0) as i16;
        let bytes = sample.to_le_bytes();
        for _ in 0..CHANNELS {
            w.write_all(&bytes).unwrap();
        }
    }
    w.flush().unwrap();
}

/// Write a WAV carrying [`REFERENCE_TAGS`], saved through the library
/// itself so read and write stay symmetric.
pub fn write_tagged_wav(path: &Path, seconds: f64) {
    write_wav(path, seconds);
    let mut song = songfile::Song::open(path).expect("open fixture");
    for (key, value) in REFERENCE_TAGS {
        song.set(key, value);
    }
    song.save().expect("tag fixture");
}

/// A file that is not audio at all.
pub fn write_junk(path: &Path) {
    std::fs::write(path, b"definitely not a media container").unwrap();
}
