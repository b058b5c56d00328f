use brz_resample::{resample, PixelBuffer};

fn main() -> anyhow::Result<()> {
    // Fake 640x360 ARGB frame with a simple gradient
    let w = 640u32;
    let h = 360u32;
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let r = x % 256;
            let g = y % 256;
            let b = (x + y) % 256;
            pixels.push(0xFF000000 | r << 16 | g << 8 | b);
        }
    }
    let src = PixelBuffer::from_pixels(w, h, pixels)?;

    let up = resample(&src, 1.5)?;
    println!("upscaled: {}x{} -> {}x{}", w, h, up.width(), up.height());

    let down = resample(&src, 0.25)?;
    println!("downscaled: {}x{} -> {}x{}", w, h, down.width(), down.height());

    let same = resample(&src, 1.0)?;
    println!("identity returned borrowed source: {}", same.is_borrowed());

    Ok(())
}
