// SPDX-License-Identifier: MIT
//! # brz-resample: Exact-Edge Bilinear Bitmap Resampling
//!
//! Pure CPU bilinear resampling for packed-ARGB pixel buffers. The resampler
//! inverse-maps every destination pixel into source space and blends the four
//! nearest source pixels per color channel.
//!
//! ## Design
//!
//! - **Edge-anchored ratios**: per-axis ratios use the `size - 1` convention,
//!   so the first and last destination pixels land exactly on the first and
//!   last source pixels. Corners stay put at every scale.
//! - **Explicit boundary clamp**: the `+1` neighbor index is clamped to the
//!   last source column/row instead of trusting the fractional weight to be
//!   exactly zero there; f32 rounding does not get a vote on memory safety.
//! - **Bit-stable output**: all blending arithmetic is f32 with truncating
//!   channel conversion, so outputs are byte-identical across runs, platforms
//!   and the serial/parallel paths.
//! - **Ownership-tagged identity**: `scale == 1.0` returns the caller's own
//!   buffer as [`Resampled::Borrowed`] instead of copying it.
//!
//! ## Key Components
//!
//! - [`plan`]: output geometry, per-axis ratios, argument validation
//! - [`bilinear`]: the per-pixel resampling loop (serial and row-parallel)
//! - [`buffer`]: [`PixelBuffer`] and the [`Resampled`] ownership tag
//!
//! ## Usage Example
//!
//! ```rust
//! use brz_resample::{resample, PixelBuffer};
//!
//! let src = PixelBuffer::from_pixels(
//!     2,
//!     2,
//!     vec![0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000],
//! )
//! .unwrap();
//!
//! let out = resample(&src, 2.0).unwrap();
//! assert_eq!((out.width(), out.height()), (4, 4));
//! assert_eq!(out.pixel(0, 0), 0xFF000000); // corners are anchored
//!
//! let same = resample(&src, 1.0).unwrap();
//! assert!(same.is_borrowed()); // identity aliases the source
//! ```

pub mod bilinear;
pub mod buffer;
pub mod plan;

pub use bilinear::resample;
#[cfg(feature = "rayon")]
pub use bilinear::resample_par;
pub use buffer::{PixelBuffer, Resampled};
pub use plan::{build_plan, ResampleError, ScalePlan, Size};
