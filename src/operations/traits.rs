//! Core trait definitions for clip operations.
//!
//! Each trait covers a single concern and is implemented for
//! [`AudioClip`](crate::AudioClip) in a sibling module, keeping the
//! editing, processing, and measurement code independent.

use crate::{ClipResult, PerChannel};

/// Time-domain editing operations.
///
/// These methods rearrange or combine whole frames. Binary operations
/// require both operands to share a channel layout, and the sample type
/// is fixed by `Self`, so bit depths never mix. Apart from
/// [`reverse`](ClipEditing::reverse), every method leaves its operands
/// untouched and returns a new clip.
pub trait ClipEditing {
    /// Appends `other` after `self`.
    ///
    /// Both clips must share the channel layout and sampling rate. The
    /// stored duration of the result is the sum of the operands' stored
    /// durations.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the layouts or sampling rates differ.
    fn concat(&self, other: &Self) -> ClipResult<Self>
    where
        Self: Sized;

    /// Mixes `other` into `self` frame by frame.
    ///
    /// Sums are computed in widened arithmetic and clamped to the sample
    /// maximum; a sum below the minimum wraps through the low end of the
    /// range instead of clamping. The result keeps `self`'s sampling rate
    /// and stored duration.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the layouts or lengths differ.
    fn add(&self, other: &Self) -> ClipResult<Self>
    where
        Self: Sized;

    /// Removes the inclusive frame range `[start, end]`.
    ///
    /// Frames before `start` and after `end` survive in order; the stored
    /// duration is recomputed from the new length. Cutting every frame
    /// yields an empty clip.
    ///
    /// # Arguments
    /// * `start` - First frame to remove
    /// * `end` - Last frame to remove (inclusive)
    ///
    /// # Errors
    /// Returns `InvalidRange` unless `start <= end && end < sample_count`.
    fn cut(&self, start: usize, end: usize) -> ClipResult<Self>
    where
        Self: Sized;

    /// Reverses the frame order in place.
    ///
    /// Channels stay paired and all metadata is unchanged. Reversing
    /// twice restores the original.
    fn reverse(&mut self);

    /// Mixes a window of `other` into a copy of `self`.
    ///
    /// Frames in the half-open window `[start, end)` are replaced with
    /// the [`add`](ClipEditing::add) sums of both clips' window frames;
    /// frames outside the window keep `self`'s values. The clips may come
    /// from unrelated recordings, so sampling rates are not compared; the
    /// result keeps `self`'s rate and stored duration.
    ///
    /// # Arguments
    /// * `other` - Clip supplying the second addend for the window
    /// * `start` - First frame of the window
    /// * `end` - Frame past the last frame of the window
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the layouts differ, and
    /// `InvalidRange` unless `start <= end` and both clips hold at least
    /// `end` frames.
    fn ranged_add(&self, other: &Self, start: usize, end: usize) -> ClipResult<Self>
    where
        Self: Sized;
}

/// Amplitude processing operations.
pub trait ClipProcessing {
    /// Scales every sample by a per-channel factor.
    ///
    /// Each product is truncated toward zero and clamped into the sample
    /// type's full range, so factors outside `[0, 1]` (including negative
    /// ones) are fine. Returns a new clip; length, layout, rate, and
    /// stored duration are unchanged.
    ///
    /// # Arguments
    /// * `factors` - One factor for mono, a left/right pair for stereo
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the factor arity does not match the
    /// channel layout.
    fn scale(&self, factors: PerChannel<f64>) -> ClipResult<Self>
    where
        Self: Sized;

    /// Rescales each channel toward a target RMS, in place.
    ///
    /// The per-channel factor is `target / current_rms`, applied with the
    /// same truncate-and-clamp narrowing as
    /// [`scale`](ClipProcessing::scale), so the measured RMS afterwards
    /// approximates the target up to rounding and clipping. A silent
    /// channel is left unchanged.
    ///
    /// # Arguments
    /// * `targets` - Target RMS per channel, arity matching the layout
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the target arity does not match the
    /// channel layout.
    fn normalize(&mut self, targets: PerChannel<f64>) -> ClipResult<()>;
}

/// Per-channel measurements.
pub trait ClipStatistics {
    /// Computes the root mean square of each channel.
    ///
    /// Accumulation happens in `f64`. An empty clip measures `0.0`.
    fn rms(&self) -> PerChannel<f64>;
}
