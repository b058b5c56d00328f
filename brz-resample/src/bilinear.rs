// SPDX-License-Identifier: MIT
// Bilinear resampler: inverse mapping with edge-anchored ratios, clamped
// four-neighbor fetch, per-channel f32 blending truncated to the u8 range.
// Arithmetic is f32 throughout; channel truncation is toward zero. Both are
// load-bearing: they keep integer outputs bit-stable across platforms.

use crate::buffer::{PixelBuffer, Resampled};
use crate::plan::{build_plan, ResampleError, ScalePlan, Size};

/// Resample `src` by `scale`.
///
/// `scale == 1.0` returns the source buffer itself ([`Resampled::Borrowed`]);
/// every other valid scale allocates a fresh destination. Output alpha is
/// forced to `0xFF` regardless of source alpha.
pub fn resample(src: &PixelBuffer, scale: f32) -> Result<Resampled<'_>, ResampleError> {
    let plan = build_plan(src.size(), scale)?;
    if scale == 1.0 {
        return Ok(Resampled::Borrowed(src));
    }

    let mut pixels = alloc_pixels(plan.out)?;
    for (y, row) in pixels.chunks_exact_mut(plan.out.w as usize).enumerate() {
        fill_row(row, y as u32, &plan, src);
    }
    Ok(Resampled::Owned(PixelBuffer::from_pixels(plan.out.w, plan.out.h, pixels)?))
}

/// Row-parallel variant of [`resample`]: destination rows are partitioned
/// across the rayon thread pool, each worker writing its own disjoint row.
/// Byte-identical output to the serial path.
#[cfg(feature = "rayon")]
pub fn resample_par(src: &PixelBuffer, scale: f32) -> Result<Resampled<'_>, ResampleError> {
    use rayon::prelude::*;

    let plan = build_plan(src.size(), scale)?;
    if scale == 1.0 {
        return Ok(Resampled::Borrowed(src));
    }

    let mut pixels = alloc_pixels(plan.out)?;
    pixels
        .par_chunks_exact_mut(plan.out.w as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y as u32, &plan, src));
    Ok(Resampled::Owned(PixelBuffer::from_pixels(plan.out.w, plan.out.h, pixels)?))
}

// Fallible reserve so an oversized destination surfaces as an error instead
// of aborting the process.
fn alloc_pixels(out: Size) -> Result<Vec<u32>, ResampleError> {
    let len = out.w as usize * out.h as usize;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| ResampleError::Allocation { pixels: len })?;
    pixels.resize(len, 0);
    Ok(pixels)
}

fn fill_row(row: &mut [u32], y: u32, plan: &ScalePlan, src: &PixelBuffer) {
    let last_x = plan.src.w - 1;
    let last_y = plan.src.h - 1;

    let gy = y as f32 * plan.y_ratio;
    let gyi = gy as u32;
    let fracy = gy - gyi as f32;
    // Clamp the +1 neighbor instead of trusting fracy to be exactly zero at
    // the last row; f32 rounding can leave a nonzero fraction there.
    let top = src.row(gyi.min(last_y));
    let bottom = src.row((gyi + 1).min(last_y));

    for (x, dst) in row.iter_mut().enumerate() {
        let gx = x as f32 * plan.x_ratio;
        let gxi = gx as u32;
        let fracx = gx - gxi as f32;
        let x0 = gxi.min(last_x) as usize;
        let x1 = (gxi + 1).min(last_x) as usize;

        let (c00, c10) = (top[x0], top[x1]);
        let (c01, c11) = (bottom[x0], bottom[x1]);

        let fx1 = 1.0 - fracx;
        let fy1 = 1.0 - fracy;
        let w00 = fx1 * fy1;
        let w10 = fracx * fy1;
        let w01 = fx1 * fracy;
        let w11 = fracx * fracy;

        let r = blend(c00 >> 16, c10 >> 16, c01 >> 16, c11 >> 16, w00, w10, w01, w11);
        let g = blend(c00 >> 8, c10 >> 8, c01 >> 8, c11 >> 8, w00, w10, w01, w11);
        let b = blend(c00, c10, c01, c11, w00, w10, w01, w11);

        *dst = 0xFF00_0000 | (r << 16) | (g << 8) | b;
    }
}

// Weighted sum of one 8-bit channel from the four neighbors, truncated.
// Weights are convex, so the result stays in [0, 255].
#[inline]
#[allow(clippy::too_many_arguments)]
fn blend(c00: u32, c10: u32, c01: u32, c11: u32, w00: f32, w10: f32, w01: f32, w11: f32) -> u32 {
    let v = w00 * (c00 & 0xFF) as f32
        + w10 * (c10 & 0xFF) as f32
        + w01 * (c01 & 0xFF) as f32
        + w11 * (c11 & 0xFF) as f32;
    v as u32
}
