//! # Bitmap Resize Library
//!
//! Bilinear bitmap resizing with exact corner anchoring, split into a pure
//! resampler core and a thin file-glue layer.
//!
//! ## Architecture
//!
//! The library is organized into two layers:
//! - `brz_resample` (workspace member): the resampler core — geometry
//!   planning, four-neighbor blending, boundary clamping. Pure and
//!   platform-free.
//! - `bitmap`: file glue — decode an image into a packed-ARGB
//!   [`PixelBuffer`], hand the resampled buffer back to an encoder.
//! - `config`: run configuration shared by the CLI and [`resize_file`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitmap_resize::{resize_file, ResizeOptions};
//!
//! # fn example() -> anyhow::Result<()> {
//! let options = ResizeOptions {
//!     input: "photo.png".to_string(),
//!     output: "photo_2x.png".to_string(),
//!     scale: 2.0,
//!     parallel: false,
//! };
//!
//! let summary = resize_file(&options)?;
//! println!("{}x{} -> {}x{}", summary.src_w, summary.src_h, summary.out_w, summary.out_h);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

pub mod bitmap;
pub mod config;

/// Re-export the resampler core for callers that work on in-memory buffers.
pub use brz_resample::{resample, resample_par, PixelBuffer, Resampled, ResampleError};

/// Options for a single file resize run.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    /// Input image path.
    pub input: String,
    /// Output image path.
    pub output: String,
    /// Scale factor applied to both axes.
    pub scale: f32,
    /// Fill destination rows on the rayon thread pool.
    pub parallel: bool,
}

/// Outcome of a resize run, for reporting.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSummary {
    pub src_w: u32,
    pub src_h: u32,
    pub out_w: u32,
    pub out_h: u32,
    /// Wall-clock time of the resampling step only (excludes file I/O).
    pub elapsed_ms: f64,
    /// True when `scale == 1.0` and the output aliases the source buffer.
    pub aliased: bool,
}

/// Load `options.input`, resample it by `options.scale`, write
/// `options.output`.
///
/// The whole run either produces a complete output file or fails with a
/// contextual error; there is no partial output.
pub fn resize_file(options: &ResizeOptions) -> Result<ResizeSummary> {
    let src = bitmap::load_bitmap(Path::new(&options.input))?;

    let started = Instant::now();
    let result = if options.parallel {
        resample_par(&src, options.scale)
    } else {
        resample(&src, options.scale)
    }
    .with_context(|| format!("cannot resample {} by {}", options.input, options.scale))?;
    let elapsed = started.elapsed();

    bitmap::save_bitmap(Path::new(&options.output), &result)?;

    Ok(ResizeSummary {
        src_w: src.width(),
        src_h: src.height(),
        out_w: result.width(),
        out_h: result.height(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        aliased: result.is_borrowed(),
    })
}
