//! Core clip container types.
//!
//! An [`AudioClip`] owns its sample data and the format metadata that cannot
//! be derived from the bytes of a headerless file: the sampling rate and the
//! stored whole-second duration. The channel dimension is runtime state
//! carried by [`ClipData`], with one row per channel for stereo.

use crate::error::{ClipError, ClipResult};
use crate::sample::PcmSample;
use crate::{ChannelLayout, LEFT, RIGHT};
use ndarray::{Array1, Array2};
use std::fmt::Display;

/// Sample storage for a clip.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipData<S: PcmSample> {
    /// Single-channel samples.
    Mono(Array1<S>),
    /// Two-channel samples: row [`LEFT`] is the left channel, row [`RIGHT`]
    /// the right.
    Stereo(Array2<S>),
}

impl<S: PcmSample> ClipData<S> {
    /// Returns the channel layout of this data.
    #[inline]
    pub const fn layout(&self) -> ChannelLayout {
        match self {
            ClipData::Mono(_) => ChannelLayout::Mono,
            ClipData::Stereo(_) => ChannelLayout::Stereo,
        }
    }

    /// Returns the number of channels.
    #[inline]
    pub const fn num_channels(&self) -> usize {
        self.layout().channels()
    }

    /// Returns true if this data is mono (single channel).
    #[inline]
    pub const fn is_mono(&self) -> bool {
        matches!(self, ClipData::Mono(_))
    }

    /// Returns the number of samples per channel.
    #[inline]
    pub fn samples_per_channel(&self) -> usize {
        match self {
            ClipData::Mono(arr) => arr.len(),
            ClipData::Stereo(arr) => arr.ncols(),
        }
    }

    /// Returns true if the data contains no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples_per_channel() == 0
    }
}

/// An owned clip of PCM audio with its format metadata.
///
/// Operations follow value semantics: they return fresh clips, except the
/// two whose contract is explicitly in place (reversal and normalization).
/// Structural equality compares data, rate, and the stored duration.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip<S: PcmSample> {
    /// The sample data.
    pub(crate) data: ClipData<S>,
    /// Sampling rate in Hz.
    pub(crate) sample_rate: u32,
    /// Stored whole seconds of audio, `floor(sample_count / sample_rate)`.
    ///
    /// An approximation, not an authoritative duration: concatenation sums
    /// the operands' stored values instead of recomputing from the new
    /// length, so the field can drift from the true duration.
    pub(crate) duration_secs: u64,
}

/// Whole seconds covered by `count` samples at `rate` Hz.
fn whole_seconds(count: usize, rate: u32) -> u64 {
    if rate == 0 {
        0
    } else {
        count as u64 / u64::from(rate)
    }
}

impl<S: PcmSample> AudioClip<S> {
    /// Creates a clip from sample data, deriving the stored duration.
    pub(crate) fn from_data(data: ClipData<S>, sample_rate: u32) -> Self {
        let duration_secs = whole_seconds(data.samples_per_channel(), sample_rate);
        AudioClip {
            data,
            sample_rate,
            duration_secs,
        }
    }

    /// Creates a clip from sample data with an already-computed duration.
    ///
    /// Used by operations whose contract carries the operand's stored
    /// duration forward instead of rederiving it.
    pub(crate) fn with_duration(data: ClipData<S>, sample_rate: u32, duration_secs: u64) -> Self {
        AudioClip {
            data,
            sample_rate,
            duration_secs,
        }
    }

    /// Creates a mono clip from a 1-D sample array.
    pub fn new_mono(samples: Array1<S>, sample_rate: u32) -> Self {
        Self::from_data(ClipData::Mono(samples), sample_rate)
    }

    /// Creates a stereo clip from a 2-row sample array (left row first).
    ///
    /// # Errors
    /// Returns an error if the array does not have exactly two rows.
    pub fn new_stereo(samples: Array2<S>, sample_rate: u32) -> ClipResult<Self> {
        if samples.nrows() != 2 {
            return Err(ClipError::InvalidParameter(format!(
                "stereo data must have exactly 2 rows, got {}",
                samples.nrows()
            )));
        }
        Ok(Self::from_data(ClipData::Stereo(samples), sample_rate))
    }

    /// Returns the sampling rate in Hz.
    #[inline]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the channel layout.
    #[inline]
    pub const fn channels(&self) -> ChannelLayout {
        self.data.layout()
    }

    /// Returns the number of channels.
    #[inline]
    pub const fn num_channels(&self) -> usize {
        self.data.num_channels()
    }

    /// Returns the bit depth of the sample type.
    #[inline]
    pub const fn bit_depth(&self) -> u8 {
        S::BITS
    }

    /// Returns the number of samples per channel.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.samples_per_channel()
    }

    /// Returns true if the clip contains no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the stored whole-second duration.
    ///
    /// Derived by integer division at construction and summed, not
    /// recomputed, across concatenation. Callers must not treat it as
    /// authoritative.
    #[inline]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_secs
    }

    /// Returns a view of the sample data.
    #[inline]
    pub const fn data(&self) -> &ClipData<S> {
        &self.data
    }
}

impl<S: PcmSample> Display for AudioClip<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<S>();
        writeln!(
            f,
            "AudioClip<{}>: {} ch × {} samples @ {} Hz",
            type_name,
            self.num_channels(),
            self.sample_count(),
            self.sample_rate
        )?;
        match &self.data {
            ClipData::Mono(arr) => {
                let preview = 5.min(arr.len());
                write!(f, "[")?;
                for (i, val) in arr.iter().take(preview).enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                if arr.len() > preview {
                    write!(f, ", ...")?;
                }
                write!(f, "]")
            }
            ClipData::Stereo(arr) => {
                for (ch, label) in [(LEFT, "L"), (RIGHT, "R")] {
                    let row = arr.row(ch);
                    let preview = 3.min(row.len());
                    if ch > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}: [", label)?;
                    for (i, val) in row.iter().take(preview).enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", val)?;
                    }
                    if row.len() > preview {
                        write!(f, ", ...")?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    }
}

/// A per-channel value: one for mono, a (left, right) pair for stereo.
///
/// Used for the parameters and results that vary per channel, such as
/// volume factors, normalization targets, and RMS values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerChannel<V> {
    /// One value for a mono clip.
    Mono(V),
    /// Left and right values for a stereo clip.
    Stereo(V, V),
}

impl<V> PerChannel<V> {
    /// Returns the channel layout these values belong to.
    #[inline]
    pub const fn layout(&self) -> ChannelLayout {
        match self {
            PerChannel::Mono(_) => ChannelLayout::Mono,
            PerChannel::Stereo(_, _) => ChannelLayout::Stereo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_mono_metadata() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
        assert_eq!(clip.sample_rate(), 8000);
        assert_eq!(clip.sample_count(), 5);
        assert_eq!(clip.num_channels(), 1);
        assert_eq!(clip.bit_depth(), 8);
        assert_eq!(clip.channels(), ChannelLayout::Mono);
        assert!(!clip.is_empty());
    }

    #[test]
    fn test_new_stereo_metadata() {
        let clip = AudioClip::new_stereo(array![[1i16, 2, 3], [4, 5, 6]], 44100).unwrap();
        assert_eq!(clip.sample_count(), 3);
        assert_eq!(clip.num_channels(), 2);
        assert_eq!(clip.bit_depth(), 16);
        assert_eq!(clip.channels(), ChannelLayout::Stereo);
    }

    #[test]
    fn test_new_stereo_rejects_wrong_row_count() {
        let result = AudioClip::new_stereo(array![[1i8, 2, 3]], 8000);
        assert!(matches!(result, Err(ClipError::InvalidParameter(_))));
    }

    #[test]
    fn test_duration_is_floor_of_count_over_rate() {
        let clip = AudioClip::new_mono(Array1::from(vec![0i8; 12000]), 8000);
        assert_eq!(clip.duration_seconds(), 1);

        let short = AudioClip::new_mono(array![1i8, 2, 3], 8000);
        assert_eq!(short.duration_seconds(), 0);
    }

    #[test]
    fn test_empty_clip_is_representable() {
        let clip = AudioClip::new_mono(Array1::<i16>::from(vec![]), 8000);
        assert!(clip.is_empty());
        assert_eq!(clip.sample_count(), 0);
        assert_eq!(clip.duration_seconds(), 0);
    }

    #[test]
    fn test_structural_equality() {
        let a = AudioClip::new_mono(array![1i8, 2, 3], 8000);
        let b = AudioClip::new_mono(array![1i8, 2, 3], 8000);
        let c = AudioClip::new_mono(array![1i8, 2, 4], 8000);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_per_channel_layout() {
        assert_eq!(PerChannel::Mono(0.5).layout(), ChannelLayout::Mono);
        assert_eq!(PerChannel::Stereo(0.5, 0.7).layout(), ChannelLayout::Stereo);
    }
}
