//! # Bitmap File Glue
//!
//! Decoding image files into packed-ARGB pixel buffers and committing
//! resampled buffers back to disk. This is the host side of the resampler
//! contract: the core never sees a file path or an `image` crate type, only
//! a [`PixelBuffer`].
//!
//! Packing is lossless in both directions for 8-bit RGBA input. Source alpha
//! is carried through the pack untouched, so the core's force-opaque output
//! invariant is observable end to end.

use std::path::Path;

use anyhow::{Context, Result};
use brz_resample::PixelBuffer;
use image::RgbaImage;

/// Decode `path` and pack it into a 0xAARRGGBB pixel buffer.
pub fn load_bitmap(path: &Path) -> Result<PixelBuffer> {
    let rgba = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba.pixels().map(|p| pack_argb(p.0)).collect();
    PixelBuffer::from_pixels(width, height, pixels)
        .with_context(|| format!("decoded image {} is not a usable bitmap", path.display()))
}

/// Unpack `buf` and encode it to `path`; the format follows the extension.
pub fn save_bitmap(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let mut img = RgbaImage::new(buf.width(), buf.height());
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = image::Rgba(unpack_argb(buf.pixel(x, y)));
    }
    img.save(path)
        .with_context(|| format!("failed to encode {}", path.display()))
}

/// Pack an `[r, g, b, a]` quadruple into a 0xAARRGGBB word.
#[inline]
pub fn pack_argb([r, g, b, a]: [u8; 4]) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Unpack a 0xAARRGGBB word into an `[r, g, b, a]` quadruple.
#[inline]
pub fn unpack_argb(color: u32) -> [u8; 4] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8, (color >> 24) as u8]
}
