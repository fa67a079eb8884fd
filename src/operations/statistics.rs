//! Per-channel measurements for audio clips.
//!
//! This module implements the [`ClipStatistics`] trait. Measurements
//! accumulate in `f64` regardless of the clip's sample type.

use super::traits::ClipStatistics;
use crate::repr::ClipData;
use crate::{AudioClip, LEFT, PcmSample, PerChannel, RIGHT};
use ndarray::ArrayView1;

/// RMS of one channel, `sqrt(sum(x^2) / n)` accumulated in `f64`.
///
/// An empty view measures `0.0`.
pub(crate) fn view_rms<S: PcmSample>(view: ArrayView1<S>) -> f64 {
    if view.is_empty() {
        return 0.0;
    }
    let sum_of_squares = view.fold(0.0, |acc, &x| acc + x.as_f64() * x.as_f64());
    (sum_of_squares / view.len() as f64).sqrt()
}

impl<S: PcmSample> ClipStatistics for AudioClip<S> {
    /// Computes the root mean square of each channel.
    fn rms(&self) -> PerChannel<f64> {
        match self.data() {
            ClipData::Mono(arr) => PerChannel::Mono(view_rms(arr.view())),
            ClipData::Stereo(arr) => {
                PerChannel::Stereo(view_rms(arr.row(LEFT)), view_rms(arr.row(RIGHT)))
            }
        }
    }
}
