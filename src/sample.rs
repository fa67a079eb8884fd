//! The sample-value trait that makes the clip container generic over bit depth.
//!
//! Every arithmetic operation narrows through the two policy methods defined
//! here, so the overflow behaviour of the whole crate is decided in one place:
//! integer sums clamp at the top of the range and wrap through the bottom
//! ([`PcmSample::clamped_add`]), while float products truncate toward zero and
//! clamp at both ends ([`PcmSample::from_f64_clamped`]).

use num_traits::{Num, ToPrimitive};
use std::fmt::{Debug, Display};

/// Core trait implemented by the supported PCM sample types.
///
/// Provides the representable range, the on-disk byte width and codec, and
/// the widening/narrowing arithmetic shared by every clip operation.
///
/// Implemented for `i8` (8-bit depth) and `i16` (16-bit depth).
pub trait PcmSample: Copy + Debug + Display + Send + Sync + Num + ToPrimitive {
    /// Maximum representable value for this sample type.
    const MAX: Self;
    /// Minimum representable value for this sample type.
    const MIN: Self;
    /// Bit depth of this sample type.
    const BITS: u8;
    /// Number of bytes one sample occupies on disk.
    const BYTES: usize = Self::BITS as usize / 8;

    /// Sums two samples in widened arithmetic.
    ///
    /// A sum above `MAX` clamps to `MAX`. A sum below `MIN` is not clamped;
    /// it wraps through the low end of the range (two's-complement
    /// truncation of the widened sum).
    fn clamped_add(self, rhs: Self) -> Self;

    /// Narrows a float to this sample type: truncates toward zero, then
    /// clamps into `[MIN, MAX]`.
    fn from_f64_clamped(value: f64) -> Self;

    /// Returns this sample widened to `f64` for scaling and RMS math.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }

    /// Decodes one sample from `BYTES` little-endian bytes.
    fn read_le(chunk: &[u8]) -> Self;

    /// Appends this sample's little-endian bytes to `out`.
    fn write_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_pcm_sample {
    ($type:ty) => {
        impl PcmSample for $type {
            const MAX: Self = <$type>::MAX;
            const MIN: Self = <$type>::MIN;
            const BITS: u8 = <$type>::BITS as u8;

            #[inline]
            fn clamped_add(self, rhs: Self) -> Self {
                let sum = self as i32 + rhs as i32;
                if sum > <$type>::MAX as i32 {
                    <$type>::MAX
                } else {
                    sum as $type
                }
            }

            #[inline]
            fn from_f64_clamped(value: f64) -> Self {
                let truncated = value.trunc();
                if truncated >= <$type>::MAX as f64 {
                    <$type>::MAX
                } else if truncated <= <$type>::MIN as f64 {
                    <$type>::MIN
                } else {
                    truncated as $type
                }
            }

            #[inline]
            fn read_le(chunk: &[u8]) -> Self {
                let mut bytes = [0u8; size_of::<$type>()];
                bytes.copy_from_slice(chunk);
                <$type>::from_le_bytes(bytes)
            }

            #[inline]
            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_pcm_sample!(i8);
impl_pcm_sample!(i16);
