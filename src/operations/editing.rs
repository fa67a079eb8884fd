//! Time-domain editing operations for audio clips.
//!
//! This module implements the [`ClipEditing`] trait, covering the
//! whole-frame operations: appending, frame-by-frame mixing, range
//! deletion, reversal, and windowed mixing, all built on ndarray
//! slicing and concatenation.

use super::traits::ClipEditing;
use crate::repr::ClipData;
use crate::{AudioClip, ClipError, ClipResult, PcmSample};
use ndarray::{Axis, concatenate, s};

/// Validates that two clips share a channel layout.
fn check_layouts<S: PcmSample>(a: &AudioClip<S>, b: &AudioClip<S>) -> ClipResult<()> {
    if a.channels() != b.channels() {
        return Err(ClipError::DimensionMismatch(format!(
            "channel layouts differ: {} vs {}",
            a.channels().suffix(),
            b.channels().suffix()
        )));
    }
    Ok(())
}

impl<S: PcmSample> ClipEditing for AudioClip<S> {
    /// Appends `other` after `self`.
    fn concat(&self, other: &Self) -> ClipResult<Self>
    where
        Self: Sized,
    {
        check_layouts(self, other)?;
        if self.sample_rate() != other.sample_rate() {
            return Err(ClipError::DimensionMismatch(format!(
                "sampling rates differ: {} Hz vs {} Hz",
                self.sample_rate(),
                other.sample_rate()
            )));
        }

        let data = match (self.data(), other.data()) {
            (ClipData::Mono(a), ClipData::Mono(b)) => {
                let joined = concatenate(Axis(0), &[a.view(), b.view()])
                    .map_err(|e| ClipError::DimensionMismatch(format!("append failed: {}", e)))?;
                ClipData::Mono(joined)
            }
            (ClipData::Stereo(a), ClipData::Stereo(b)) => {
                let joined = concatenate(Axis(1), &[a.view(), b.view()])
                    .map_err(|e| ClipError::DimensionMismatch(format!("append failed: {}", e)))?;
                ClipData::Stereo(joined)
            }
            _ => unreachable!(),
        };

        Ok(Self::with_duration(
            data,
            self.sample_rate(),
            self.duration_seconds() + other.duration_seconds(),
        ))
    }

    /// Mixes `other` into `self` frame by frame.
    fn add(&self, other: &Self) -> ClipResult<Self>
    where
        Self: Sized,
    {
        check_layouts(self, other)?;
        if self.sample_count() != other.sample_count() {
            return Err(ClipError::DimensionMismatch(format!(
                "sample counts differ: {} vs {}",
                self.sample_count(),
                other.sample_count()
            )));
        }

        let mut mixed = self.clone();
        match (&mut mixed.data, other.data()) {
            (ClipData::Mono(dst), ClipData::Mono(src)) => {
                for (d, &s) in dst.iter_mut().zip(src.iter()) {
                    *d = d.clamped_add(s);
                }
            }
            (ClipData::Stereo(dst), ClipData::Stereo(src)) => {
                for (d, &s) in dst.iter_mut().zip(src.iter()) {
                    *d = d.clamped_add(s);
                }
            }
            _ => unreachable!(),
        }
        Ok(mixed)
    }

    /// Removes the inclusive frame range `[start, end]`.
    fn cut(&self, start: usize, end: usize) -> ClipResult<Self>
    where
        Self: Sized,
    {
        let count = self.sample_count();
        if start > end || end >= count {
            return Err(ClipError::InvalidRange(format!(
                "cannot cut frames [{}, {}] from a clip of {} frames",
                start, end, count
            )));
        }

        let data = match self.data() {
            ClipData::Mono(arr) => {
                let kept = concatenate(Axis(0), &[arr.slice(s![..start]), arr.slice(s![end + 1..])])
                    .map_err(|e| ClipError::DimensionMismatch(format!("cut failed: {}", e)))?;
                ClipData::Mono(kept)
            }
            ClipData::Stereo(arr) => {
                let kept = concatenate(
                    Axis(1),
                    &[arr.slice(s![.., ..start]), arr.slice(s![.., end + 1..])],
                )
                .map_err(|e| ClipError::DimensionMismatch(format!("cut failed: {}", e)))?;
                ClipData::Stereo(kept)
            }
        };

        Ok(Self::from_data(data, self.sample_rate()))
    }

    /// Reverses the frame order in place.
    fn reverse(&mut self) {
        match &mut self.data {
            ClipData::Mono(arr) => arr.invert_axis(Axis(0)),
            ClipData::Stereo(arr) => arr.invert_axis(Axis(1)),
        }
    }

    /// Mixes a window of `other` into a copy of `self`.
    fn ranged_add(&self, other: &Self, start: usize, end: usize) -> ClipResult<Self>
    where
        Self: Sized,
    {
        check_layouts(self, other)?;
        if start > end {
            return Err(ClipError::InvalidRange(format!(
                "window start {} is past window end {}",
                start, end
            )));
        }
        if self.sample_count() < end || other.sample_count() < end {
            return Err(ClipError::InvalidRange(format!(
                "window [{}, {}) needs {} frames, clips hold {} and {}",
                start,
                end,
                end,
                self.sample_count(),
                other.sample_count()
            )));
        }

        let mut mixed = self.clone();
        match (&mut mixed.data, other.data()) {
            (ClipData::Mono(dst), ClipData::Mono(src)) => {
                let window = src.slice(s![start..end]);
                for (d, &s) in dst.slice_mut(s![start..end]).iter_mut().zip(window.iter()) {
                    *d = d.clamped_add(s);
                }
            }
            (ClipData::Stereo(dst), ClipData::Stereo(src)) => {
                let window = src.slice(s![.., start..end]);
                for (d, &s) in dst
                    .slice_mut(s![.., start..end])
                    .iter_mut()
                    .zip(window.iter())
                {
                    *d = d.clamped_add(s);
                }
            }
            _ => unreachable!(),
        }
        Ok(mixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    #[test]
    fn test_concat_appends_in_order() {
        let a = AudioClip::new_mono(array![1i8, 2, 3], 8000);
        let b = AudioClip::new_mono(array![4i8, 5], 8000);

        let joined = a.concat(&b).unwrap();

        assert_eq!(joined.sample_count(), a.sample_count() + b.sample_count());
        assert_eq!(joined.data(), &ClipData::Mono(array![1i8, 2, 3, 4, 5]));
    }

    #[test]
    fn test_concat_stereo_appends_frames() {
        let a = AudioClip::new_stereo(array![[1i16, 2], [5, 6]], 44100).unwrap();
        let b = AudioClip::new_stereo(array![[3i16], [7]], 44100).unwrap();

        let joined = a.concat(&b).unwrap();

        assert_eq!(
            joined.data(),
            &ClipData::Stereo(array![[1i16, 2, 3], [5, 6, 7]])
        );
    }

    #[test]
    fn test_concat_with_empty_clip() {
        let empty = AudioClip::new_mono(Array1::<i8>::from(vec![]), 8000);
        let clip = AudioClip::new_mono(array![7i8, 8], 8000);

        let joined = empty.concat(&clip).unwrap();

        assert_eq!(joined, clip);
    }

    #[test]
    fn test_concat_sums_stored_durations() {
        // 12000 and 20000 samples at 8000 Hz floor to 1 s and 2 s; a
        // recomputed duration for the joined clip would be 4 s.
        let a = AudioClip::new_mono(Array1::from(vec![0i8; 12000]), 8000);
        let b = AudioClip::new_mono(Array1::from(vec![0i8; 20000]), 8000);
        assert_eq!(a.duration_seconds(), 1);
        assert_eq!(b.duration_seconds(), 2);

        let joined = a.concat(&b).unwrap();

        assert_eq!(joined.sample_count(), 32000);
        assert_eq!(joined.duration_seconds(), 3);
    }

    #[test]
    fn test_concat_rejects_mismatches() {
        let a = AudioClip::new_mono(array![1i8, 2], 8000);

        let other_rate = AudioClip::new_mono(array![3i8], 16000);
        assert!(matches!(
            a.concat(&other_rate),
            Err(ClipError::DimensionMismatch(_))
        ));

        let stereo = AudioClip::new_stereo(array![[1i8, 2], [3, 4]], 8000).unwrap();
        assert!(matches!(
            a.concat(&stereo),
            Err(ClipError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_add_mixes_samples() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);

        let mixed = clip.add(&clip).unwrap();

        assert_eq!(mixed.data(), &ClipData::Mono(array![20i8, 40, 60, 80, 100]));
        assert_eq!(mixed.sample_rate(), 8000);
    }

    #[test]
    fn test_add_saturates_high_and_wraps_low() {
        let frames = array![[100i8], [-100]];
        let clip = AudioClip::new_stereo(frames, 8000).unwrap();

        let mixed = clip.add(&clip).unwrap();

        // 200 clamps to the maximum; -200 wraps through the low end.
        assert_eq!(mixed.data(), &ClipData::Stereo(array![[127i8], [56]]));
    }

    #[test]
    fn test_add_wide_samples_saturate_and_wrap() {
        let clip = AudioClip::new_mono(array![30000i16, -30000], 44100);

        let mixed = clip.add(&clip).unwrap();

        assert_eq!(mixed.data(), &ClipData::Mono(array![32767i16, 5536]));
    }

    #[test]
    fn test_add_rejects_mismatched_operands() {
        let a = AudioClip::new_mono(array![1i8, 2, 3], 8000);

        let short = AudioClip::new_mono(array![1i8, 2], 8000);
        assert!(matches!(
            a.add(&short),
            Err(ClipError::DimensionMismatch(_))
        ));

        let stereo = AudioClip::new_stereo(array![[1i8, 2, 3], [4, 5, 6]], 8000).unwrap();
        assert!(matches!(
            a.add(&stereo),
            Err(ClipError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_cut_removes_inclusive_range() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);

        let remaining = clip.cut(1, 3).unwrap();

        assert_eq!(remaining.sample_count(), 2);
        assert_eq!(remaining.data(), &ClipData::Mono(array![10i8, 50]));
    }

    #[test]
    fn test_cut_single_frame() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30], 8000);

        let remaining = clip.cut(1, 1).unwrap();

        assert_eq!(remaining.data(), &ClipData::Mono(array![10i8, 30]));
    }

    #[test]
    fn test_cut_whole_clip_leaves_empty() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30], 8000);

        let remaining = clip.cut(0, 2).unwrap();

        assert!(remaining.is_empty());
        assert_eq!(remaining.duration_seconds(), 0);
    }

    #[test]
    fn test_cut_stereo_keeps_channels_paired() {
        let clip = AudioClip::new_stereo(array![[1i8, 2, 3], [4, 5, 6]], 8000).unwrap();

        let remaining = clip.cut(1, 1).unwrap();

        assert_eq!(remaining.data(), &ClipData::Stereo(array![[1i8, 3], [4, 6]]));
    }

    #[test]
    fn test_cut_recomputes_duration() {
        let clip = AudioClip::new_mono(Array1::from(vec![0i8; 20000]), 8000);
        assert_eq!(clip.duration_seconds(), 2);

        let remaining = clip.cut(0, 7999).unwrap();

        assert_eq!(remaining.sample_count(), 12000);
        assert_eq!(remaining.duration_seconds(), 1);
    }

    #[test]
    fn test_cut_rejects_bad_bounds() {
        let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);

        assert!(matches!(clip.cut(3, 1), Err(ClipError::InvalidRange(_))));
        assert!(matches!(clip.cut(1, 5), Err(ClipError::InvalidRange(_))));
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let original = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
        let mut clip = original.clone();

        clip.reverse();
        assert_eq!(clip.data(), &ClipData::Mono(array![50i8, 40, 30, 20, 10]));

        clip.reverse();
        assert_eq!(clip, original);
    }

    #[test]
    fn test_reverse_stereo_keeps_pairing() {
        let mut clip = AudioClip::new_stereo(array![[1i8, 2, 3], [4, 5, 6]], 8000).unwrap();

        clip.reverse();

        assert_eq!(clip.data(), &ClipData::Stereo(array![[3i8, 2, 1], [6, 5, 4]]));
    }

    #[test]
    fn test_ranged_add_mixes_window_only() {
        let base = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
        let overlay = AudioClip::new_mono(array![1i8, 1, 1, 1, 1], 8000);

        let mixed = base.ranged_add(&overlay, 1, 4).unwrap();

        assert_eq!(mixed.data(), &ClipData::Mono(array![10i8, 21, 31, 41, 50]));
    }

    #[test]
    fn test_ranged_add_stereo_window() {
        let base = AudioClip::new_stereo(array![[10i8, 20, 30], [40, 50, 60]], 8000).unwrap();
        let overlay = AudioClip::new_stereo(array![[1i8, 2, 3], [4, 5, 6]], 8000).unwrap();

        let mixed = base.ranged_add(&overlay, 0, 2).unwrap();

        assert_eq!(
            mixed.data(),
            &ClipData::Stereo(array![[11i8, 22, 30], [44, 55, 60]])
        );
    }

    #[test]
    fn test_ranged_add_accepts_unrelated_rates() {
        let base = AudioClip::new_mono(array![10i8, 20, 30], 8000);
        let overlay = AudioClip::new_mono(array![5i8, 5, 5], 44100);

        let mixed = base.ranged_add(&overlay, 0, 3).unwrap();

        assert_eq!(mixed.data(), &ClipData::Mono(array![15i8, 25, 35]));
        assert_eq!(mixed.sample_rate(), 8000);
    }

    #[test]
    fn test_ranged_add_empty_window_is_identity() {
        let base = AudioClip::new_mono(array![10i8, 20, 30], 8000);
        let overlay = AudioClip::new_mono(array![5i8, 5, 5], 8000);

        let mixed = base.ranged_add(&overlay, 2, 2).unwrap();

        assert_eq!(mixed, base);
    }

    #[test]
    fn test_ranged_add_rejects_bad_windows() {
        let base = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
        let overlay = AudioClip::new_mono(array![1i8, 1, 1], 8000);

        assert!(matches!(
            base.ranged_add(&overlay, 1, 4),
            Err(ClipError::InvalidRange(_))
        ));
        assert!(matches!(
            base.ranged_add(&overlay, 2, 1),
            Err(ClipError::InvalidRange(_))
        ));
    }
}
