//! Amplitude processing for audio clips.
//!
//! This module implements the [`ClipProcessing`] trait: per-channel
//! volume scaling and RMS normalization, both narrowing every product
//! through the shared truncate-and-clamp policy.

use super::statistics::view_rms;
use super::traits::ClipProcessing;
use crate::repr::ClipData;
use crate::{AudioClip, ClipError, ClipResult, LEFT, PcmSample, PerChannel, RIGHT};
use tracing::debug;

/// Validates that a per-channel parameter matches the clip's layout.
fn check_arity<S: PcmSample, V>(
    clip: &AudioClip<S>,
    params: &PerChannel<V>,
    what: &str,
) -> ClipResult<()> {
    if params.layout() != clip.channels() {
        return Err(ClipError::DimensionMismatch(format!(
            "{} arity does not match a {} clip",
            what,
            clip.channels().suffix()
        )));
    }
    Ok(())
}

impl<S: PcmSample> ClipProcessing for AudioClip<S> {
    /// Scales every sample by a per-channel factor.
    fn scale(&self, factors: PerChannel<f64>) -> ClipResult<Self>
    where
        Self: Sized,
    {
        check_arity(self, &factors, "volume factor")?;

        let mut scaled = self.clone();
        match (&mut scaled.data, factors) {
            (ClipData::Mono(arr), PerChannel::Mono(factor)) => {
                arr.mapv_inplace(|x| S::from_f64_clamped(x.as_f64() * factor));
            }
            (ClipData::Stereo(arr), PerChannel::Stereo(left, right)) => {
                arr.row_mut(LEFT)
                    .mapv_inplace(|x| S::from_f64_clamped(x.as_f64() * left));
                arr.row_mut(RIGHT)
                    .mapv_inplace(|x| S::from_f64_clamped(x.as_f64() * right));
            }
            _ => unreachable!(),
        }
        Ok(scaled)
    }

    /// Rescales each channel toward a target RMS, in place.
    fn normalize(&mut self, targets: PerChannel<f64>) -> ClipResult<()> {
        check_arity(self, &targets, "target RMS")?;

        match (&mut self.data, targets) {
            (ClipData::Mono(arr), PerChannel::Mono(target)) => {
                let current = view_rms(arr.view());
                if current == 0.0 {
                    debug!("leaving a silent clip unchanged");
                    return Ok(());
                }
                let factor = target / current;
                arr.mapv_inplace(|x| S::from_f64_clamped(x.as_f64() * factor));
            }
            (ClipData::Stereo(arr), PerChannel::Stereo(left, right)) => {
                for (channel, target) in [(LEFT, left), (RIGHT, right)] {
                    let current = view_rms(arr.row(channel));
                    if current == 0.0 {
                        debug!("leaving silent channel {} unchanged", channel);
                        continue;
                    }
                    let factor = target / current;
                    arr.row_mut(channel)
                        .mapv_inplace(|x| S::from_f64_clamped(x.as_f64() * factor));
                }
            }
            _ => unreachable!(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scale_halves_amplitude() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);

        let quiet = clip.scale(PerChannel::Mono(0.5)).unwrap();

        assert_eq!(quiet.data(), &ClipData::Mono(array![5i8, 10, 15, 20, 25]));
        assert_eq!(quiet.sample_rate(), 8000);
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        let clip = AudioClip::new_mono(array![15i8, -15], 8000);

        let quiet = clip.scale(PerChannel::Mono(0.5)).unwrap();

        assert_eq!(quiet.data(), &ClipData::Mono(array![7i8, -7]));
    }

    #[test]
    fn test_scale_clamps_products() {
        let clip = AudioClip::new_mono(array![100i8, -100], 8000);

        let loud = clip.scale(PerChannel::Mono(2.0)).unwrap();

        assert_eq!(loud.data(), &ClipData::Mono(array![127i8, -128]));
    }

    #[test]
    fn test_scale_negative_factor_inverts() {
        let clip = AudioClip::new_mono(array![-128i8, 5], 8000);

        let flipped = clip.scale(PerChannel::Mono(-1.0)).unwrap();

        // -128 inverts to 128, which clamps back to 127.
        assert_eq!(flipped.data(), &ClipData::Mono(array![127i8, -5]));
    }

    #[test]
    fn test_scale_stereo_independent_factors() {
        let clip = AudioClip::new_stereo(array![[10i16, 20], [30, 40]], 44100).unwrap();

        let adjusted = clip.scale(PerChannel::Stereo(2.0, 0.5)).unwrap();

        assert_eq!(
            adjusted.data(),
            &ClipData::Stereo(array![[20i16, 40], [15, 20]])
        );
    }

    #[test]
    fn test_scale_rejects_wrong_arity() {
        let mono = AudioClip::new_mono(array![1i8, 2], 8000);
        assert!(matches!(
            mono.scale(PerChannel::Stereo(1.0, 1.0)),
            Err(ClipError::DimensionMismatch(_))
        ));

        let stereo = AudioClip::new_stereo(array![[1i8, 2], [3, 4]], 8000).unwrap();
        assert!(matches!(
            stereo.scale(PerChannel::Mono(1.0)),
            Err(ClipError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_normalize_reaches_exact_target() {
        let mut clip = AudioClip::new_mono(array![10i8, 10, 10, 10], 8000);

        clip.normalize(PerChannel::Mono(5.0)).unwrap();

        assert_eq!(clip.data(), &ClipData::Mono(array![5i8, 5, 5, 5]));
    }

    #[test]
    fn test_normalize_approximates_under_rounding() {
        let mut clip = AudioClip::new_mono(array![3i8, 4], 8000);

        clip.normalize(PerChannel::Mono(10.0)).unwrap();

        // 3 and 4 scale by 10 / sqrt(12.5) and truncate to 8 and 11.
        assert_eq!(clip.data(), &ClipData::Mono(array![8i8, 11]));
    }

    #[test]
    fn test_normalize_stereo_per_channel_targets() {
        let mut clip = AudioClip::new_stereo(array![[10i16, 10], [20, 20]], 44100).unwrap();

        clip.normalize(PerChannel::Stereo(5.0, 10.0)).unwrap();

        assert_eq!(
            clip.data(),
            &ClipData::Stereo(array![[5i16, 5], [10, 10]])
        );
    }

    #[test]
    fn test_normalize_leaves_silence_untouched() {
        let mut clip = AudioClip::new_mono(array![0i8, 0, 0], 8000);

        clip.normalize(PerChannel::Mono(100.0)).unwrap();

        assert_eq!(clip.data(), &ClipData::Mono(array![0i8, 0, 0]));
    }

    #[test]
    fn test_normalize_rejects_wrong_arity() {
        let mut mono = AudioClip::new_mono(array![1i8, 2], 8000);
        assert!(matches!(
            mono.normalize(PerChannel::Stereo(1.0, 1.0)),
            Err(ClipError::DimensionMismatch(_))
        ));

        let mut stereo = AudioClip::new_stereo(array![[1i8, 2], [3, 4]], 8000).unwrap();
        assert!(matches!(
            stereo.normalize(PerChannel::Mono(1.0)),
            Err(ClipError::DimensionMismatch(_))
        ));
    }
}
