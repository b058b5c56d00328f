use std::time::{Duration, Instant};

use bitmap_resize::{resample, resample_par, PixelBuffer};

/// Benchmark for the bilinear resampler core.
///
/// Time complexity: O(out_pixels) per scale — the per-pixel blend is constant
/// work, so throughput should be flat in megapixels per second across scales.
///
/// Missing functionality: could be extended to benchmark the file pipeline
/// (decode + resample + encode), but currently measures the core only.
fn main() {
    println!("Bilinear Resample Benchmark");
    println!("═══════════════════════════════════");

    // Test with a 1080p synthetic frame
    let width = 1920u32;
    let height = 1080u32;
    let rounds = 10;

    println!(
        "Benchmarking: {}x{} source, {} rounds per scale",
        width, height, rounds
    );
    println!();

    let src = gradient_frame(width, height);

    for scale in [0.5f32, 0.75, 1.5, 2.0] {
        let serial = time_rounds(rounds, || {
            resample(&src, scale).expect("resample failed");
        });
        let parallel = time_rounds(rounds, || {
            resample_par(&src, scale).expect("resample failed");
        });

        let out_w = (width as f32 * scale) as u64;
        let out_h = (height as f32 * scale) as u64;
        let mpix = (out_w * out_h) as f64 / 1_000_000.0;

        println!("Scale {:.2} ({}x{}):", scale, out_w, out_h);
        println!("───────────");
        println!(
            "Serial:   {:.2} ms per frame ({:.1} Mpix/s)",
            serial.as_secs_f64() * 1000.0 / rounds as f64,
            mpix * rounds as f64 / serial.as_secs_f64()
        );
        println!(
            "Parallel: {:.2} ms per frame ({:.1} Mpix/s, {:.1}x speedup)",
            parallel.as_secs_f64() * 1000.0 / rounds as f64,
            mpix * rounds as f64 / parallel.as_secs_f64(),
            serial.as_secs_f64() / parallel.as_secs_f64()
        );
        println!();
    }
}

fn gradient_frame(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = x % 256;
            let g = y % 256;
            let b = (x + y) % 256;
            pixels.push(0xFF000000 | r << 16 | g << 8 | b);
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).expect("gradient frame")
}

fn time_rounds(rounds: u32, mut work: impl FnMut()) -> Duration {
    let start = Instant::now();
    for _ in 0..rounds {
        work();
    }
    start.elapsed()
}
