//! Clip operations and transformations.
//!
//! The operations are organized into focused traits, each covering one
//! aspect of working with a clip:
//!
//! - [`traits`] - Core trait definitions
//! - [`editing`] - Sequence editing (concatenate, add, cut, reverse, ranged add)
//! - [`processing`] - Amplitude processing (volume scaling, normalization)
//! - [`statistics`] - Per-channel measurements (RMS)
//!
//! ```rust
//! use rawclip::{AudioClip, PerChannel, operations::*};
//! use ndarray::array;
//!
//! # fn example() -> rawclip::ClipResult<()> {
//! let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
//!
//! let doubled = clip.add(&clip)?;
//! let trimmed = doubled.cut(1, 3)?;
//! let quiet = trimmed.scale(PerChannel::Mono(0.5))?;
//! let rms = quiet.rms();
//! # let _ = rms;
//! # Ok(())
//! # }
//! ```

pub mod editing;
pub mod processing;
pub mod statistics;
pub mod traits;

// Re-export the traits for convenience
pub use traits::{ClipEditing, ClipProcessing, ClipStatistics};
