use anyhow::Result;
use clap::Parser;

use bitmap_resize::config::ResizeConfig;

/// Minimal, human-friendly bitmap resizer:
/// - bilinear interpolation with exact corner anchoring
/// - byte-stable output across the serial and parallel paths
#[derive(Parser, Debug)]
#[command(name = "brz")]
#[command(about = "🖼️  Resize an image by a scale factor with bilinear interpolation")]
#[command(long_about = "Resize an image by an arbitrary positive scale factor using bilinear interpolation.
The first and last pixels of each axis are anchored, so corners never drift. Output is
always fully opaque. A scale of 1.0 copies the image through unchanged.")]
struct Args {
    /// Input image path (PNG, JPEG, BMP, ...)
    #[arg(help = "Image file to resize")]
    input: String,

    /// Output image path (positional or use -o)
    #[arg(default_value = "resized.png", help = "Output file path (format from extension)")]
    output: String,

    /// Output image path
    #[arg(short, long, help = "Alternative way to specify output file")]
    output_flag: Option<String>,

    /// Scale factor (supports plain factors, percentages and multipliers)
    #[arg(short, long, default_value = "2.0",
          help = "How much to scale: 1.5 (factor), 150% (percent), 2x (multiplier)")]
    scale: String,

    /// Fill destination rows across worker threads
    #[arg(long, help = "Partition destination rows over the rayon thread pool")]
    parallel: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse scale string (e.g., "1.5", "150%", "2x")
    let scale = parse_scale(&args.scale)?;

    // Use output flag if provided, otherwise use positional argument
    let output = args.output_flag.unwrap_or(args.output);

    let config = ResizeConfig::new(args.input, output, scale, args.parallel);
    config.validate().map_err(anyhow::Error::msg)?;
    let options = config.to_resize_options();

    let summary = bitmap_resize::resize_file(&options)?;
    if summary.aliased {
        println!(
            "{}: {}x{} unchanged (scale 1.0), copied to {}",
            options.input, summary.src_w, summary.src_h, options.output
        );
    } else {
        println!(
            "{}: {}x{} -> {}x{} in {:.2} ms ({})",
            options.input,
            summary.src_w,
            summary.src_h,
            summary.out_w,
            summary.out_h,
            summary.elapsed_ms,
            options.output
        );
    }
    Ok(())
}

/// Parse a scale string like "1.5", "150%" or "2x" into a factor
fn parse_scale(scale: &str) -> Result<f32> {
    if let Ok(factor) = scale.parse::<f32>() {
        return Ok(factor);
    }

    let len = scale.len();
    if len < 2 {
        return Err(anyhow::anyhow!("Invalid scale format: {}", scale));
    }

    let (num_str, unit) = scale.split_at(len - 1);
    let num: f32 = num_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid number in scale: {}", num_str))?;

    match unit {
        "%" => Ok(num / 100.0),
        "x" => Ok(num),
        _ => Err(anyhow::anyhow!(
            "Invalid scale unit: {}. Use a plain factor (1.5), a percentage (150%) or a multiplier (2x)",
            unit
        )),
    }
}
