// Correctness and logic
#![warn(clippy::unit_cmp)]
#![warn(clippy::match_same_arms)]

// Performance-focused
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::map_clone)]
#![warn(clippy::unnecessary_to_owned)]
#![warn(clippy::large_stack_arrays)]
#![warn(clippy::box_collection)]
#![warn(clippy::vec_box)]
#![warn(clippy::needless_collect)]

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)]
#![warn(clippy::identity_op)]
#![warn(clippy::needless_return)]
#![warn(clippy::let_unit_value)]
#![warn(clippy::manual_map)]
#![warn(clippy::unwrap_used)] // Library code propagates errors instead

// Maintainability
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![deny(missing_docs)]

//! # rawclip
//!
//! An editor for headerless PCM audio clips: load raw sample data with a
//! caller-supplied format, apply an editing operation, and write the
//! result to a new raw file whose name records that format.
//!
//! The core type is [`AudioClip`], generic over the sample width
//! ([`PcmSample`], implemented for `i8` and `i16`) and channel-aware at
//! runtime through [`ClipData`]. Operations are grouped into focused
//! traits: [`ClipEditing`] for whole-frame edits, [`ClipProcessing`] for
//! amplitude work, and [`ClipStatistics`] for measurements.
//!
//! ## Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rawclip = "0.1.0"
//! ```
//!
//! ## File Format
//!
//! Files are headerless interleaved signed PCM, little-endian, one or two
//! channels, 8- or 16-bit samples. A frame is `channels * bytes_per_sample`
//! bytes with the left sample first. The sampling rate is never stored;
//! callers supply it on load, and derived output names record it:
//! `<base>_<rate>_<bits>_<mono|stereo>.raw`.
//!
//! ## Quick Start
//!
//! ### Editing in memory
//!
//! ```rust
//! use rawclip::{AudioClip, ClipData, ClipEditing, ClipProcessing, PerChannel};
//! use ndarray::array;
//!
//! let clip = AudioClip::new_mono(array![10i8, 20, 30, 40, 50], 8000);
//!
//! // Remove frames 1 through 3, then halve the volume.
//! let shorter = clip.cut(1, 3).unwrap();
//! let quiet = shorter.scale(PerChannel::Mono(0.5)).unwrap();
//!
//! assert_eq!(quiet.data(), &ClipData::Mono(array![5i8, 25]));
//! ```
//!
//! ### Working with raw files
//!
//! ```rust,no_run
//! use rawclip::{AudioClip, ChannelLayout, ClipEditing};
//!
//! fn main() -> rawclip::ClipResult<()> {
//!     let a = AudioClip::<i16>::load("intro.raw", 44100, ChannelLayout::Stereo)?;
//!     let b = AudioClip::<i16>::load("outro.raw", 44100, ChannelLayout::Stereo)?;
//!
//!     let joined = a.concat(&b)?;
//!     let written = joined.save("session")?;
//!     println!("wrote {}", written.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ClipResult`], with one flat [`ClipError`]
//! enum covering I/O, range, parameter, and dimension failures:
//!
//! ```rust
//! use rawclip::{AudioClip, ClipEditing, ClipError};
//! use ndarray::array;
//!
//! let clip = AudioClip::new_mono(array![1i8, 2, 3], 8000);
//!
//! match clip.cut(2, 9) {
//!     Err(ClipError::InvalidRange(msg)) => eprintln!("bad cut: {msg}"),
//!     Err(other) => eprintln!("error: {other}"),
//!     Ok(_) => {}
//! }
//! ```
//!
//! ## License
//!
//! MIT License

mod error;
mod io;
pub mod operations;
mod repr;
mod sample;

pub use crate::error::{ClipError, ClipResult};
pub use crate::io::output_path;
pub use crate::operations::{ClipEditing, ClipProcessing, ClipStatistics};
pub use crate::repr::{AudioClip, ClipData, PerChannel};
pub use crate::sample::PcmSample;

/// Left channel index.
pub const LEFT: usize = 0;
/// Right channel index.
pub const RIGHT: usize = 1;

/// Describes the channel arrangement of a raw clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One sample per frame.
    Mono,
    /// Two samples per frame, left before right.
    Stereo,
}

impl ChannelLayout {
    /// Number of samples in one frame.
    pub const fn channels(&self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    /// Returns true if the layout is mono.
    pub const fn is_mono(&self) -> bool {
        matches!(self, ChannelLayout::Mono)
    }

    /// Layout tag carried in derived output file names.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ChannelLayout::Mono => "mono",
            ChannelLayout::Stereo => "stereo",
        }
    }
}
