//! Headerless PCM codec and file entry points.
//!
//! The on-disk format is a bare sequence of frames with no header or
//! metadata: one little-endian signed sample per channel, left before right
//! for stereo, so a frame occupies `channel_count * (bit_depth / 8)` bytes.
//! The sampling rate is supplied by the caller, never read from the file.
//!
//! A file whose size is not a whole number of frames is truncated to the
//! largest whole frame count; the dropped tail is reported through a
//! `tracing` warning rather than an error.

use crate::error::{ClipError, ClipResult};
use crate::repr::{AudioClip, ClipData};
use crate::sample::PcmSample;
use crate::{ChannelLayout, LEFT, RIGHT};
use ndarray::{Array1, Array2};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Derives an output file name from a base name and the clip format:
/// `<base>_<rate>_<bits>_<mono|stereo>.raw`.
///
/// The suffix makes repeated runs over different formats land in different
/// files. Any directory components of `base` are kept.
pub fn output_path(base: &Path, sample_rate: u32, bit_depth: u8, layout: ChannelLayout) -> PathBuf {
    let stem = match base.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::from("out"),
    };
    let name = format!(
        "{}_{}_{}_{}.raw",
        stem,
        sample_rate,
        bit_depth,
        layout.suffix()
    );
    base.with_file_name(name)
}

impl<S: PcmSample> AudioClip<S> {
    /// Decodes a byte stream of interleaved little-endian samples.
    ///
    /// Trailing bytes that do not fill a whole frame are dropped with a
    /// logged warning.
    pub fn decode(bytes: &[u8], sample_rate: u32, layout: ChannelLayout) -> Self {
        let frame_size = S::BYTES * layout.channels();
        let frames = bytes.len() / frame_size;
        let trailing = bytes.len() % frame_size;
        if trailing != 0 {
            warn!(
                "input is not a whole number of frames; dropping {} trailing byte(s)",
                trailing
            );
        }
        let data = match layout {
            ChannelLayout::Mono => {
                let samples: Vec<S> = bytes.chunks_exact(S::BYTES).map(S::read_le).collect();
                ClipData::Mono(Array1::from(samples))
            }
            ChannelLayout::Stereo => {
                let mut arr = Array2::zeros((2, frames));
                for (i, frame) in bytes.chunks_exact(frame_size).enumerate() {
                    arr[[LEFT, i]] = S::read_le(&frame[..S::BYTES]);
                    arr[[RIGHT, i]] = S::read_le(&frame[S::BYTES..]);
                }
                ClipData::Stereo(arr)
            }
        };
        Self::from_data(data, sample_rate)
    }

    /// Encodes the clip into interleaved little-endian frame bytes.
    ///
    /// The inverse of [`AudioClip::decode`]: decoding the result with the
    /// same format yields an identical sample sequence.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.sample_count() * self.num_channels() * S::BYTES);
        match &self.data {
            ClipData::Mono(arr) => {
                for &sample in arr.iter() {
                    sample.write_le(&mut out);
                }
            }
            ClipData::Stereo(arr) => {
                for i in 0..arr.ncols() {
                    arr[[LEFT, i]].write_le(&mut out);
                    arr[[RIGHT, i]].write_le(&mut out);
                }
            }
        }
        out
    }

    /// Reads and decodes a raw clip file.
    ///
    /// # Errors
    /// Returns [`ClipError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>, sample_rate: u32, layout: ChannelLayout) -> ClipResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ClipError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let clip = Self::decode(&bytes, sample_rate, layout);
        debug!("loaded {} frames from {}", clip.sample_count(), path.display());
        Ok(clip)
    }

    /// Encodes the clip and writes it to the file derived from `base` by
    /// [`output_path`]. Returns the path written.
    ///
    /// # Errors
    /// Returns [`ClipError::Io`] if the file cannot be created or written.
    pub fn save(&self, base: impl AsRef<Path>) -> ClipResult<PathBuf> {
        let path = output_path(base.as_ref(), self.sample_rate, S::BITS, self.channels());
        fs::write(&path, self.encode()).map_err(|source| ClipError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("saved {} frames to {}", self.sample_count(), path.display());
        Ok(path)
    }
}
