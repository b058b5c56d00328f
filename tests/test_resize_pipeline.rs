//! End-to-end pipeline tests: decode a file, resample it, encode the result
//! and read it back. Exercises the same path the CLI takes.

use std::path::Path;

use bitmap_resize::bitmap::{load_bitmap, pack_argb, save_bitmap};
use bitmap_resize::{resize_file, PixelBuffer, ResizeOptions};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// 10x10 opaque gradient written as a PNG.
fn write_gradient_png(path: &Path) -> RgbaImage {
    let img = RgbaImage::from_fn(10, 10, |x, y| {
        Rgba([(x * 25) as u8, (y * 25) as u8, (x + y) as u8, 255])
    });
    img.save(path).expect("write test input");
    img
}

fn options(input: &Path, output: &Path, scale: f32) -> ResizeOptions {
    ResizeOptions {
        input: input.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        scale,
        parallel: false,
    }
}

#[test]
fn bitmap_roundtrip_preserves_pixels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.png");

    // Varied alpha on purpose: the pack must carry it losslessly.
    let img = RgbaImage::from_fn(6, 4, |x, y| {
        Rgba([x as u8 * 40, y as u8 * 60, 200, (x * y) as u8 * 10])
    });
    img.save(&path).unwrap();

    let buf = load_bitmap(&path).unwrap();
    assert_eq!((buf.width(), buf.height()), (6, 4));
    for (x, y, px) in img.enumerate_pixels() {
        assert_eq!(buf.pixel(x, y), pack_argb(px.0));
    }

    let out = dir.path().join("copy.png");
    save_bitmap(&out, &buf).unwrap();
    assert_eq!(load_bitmap(&out).unwrap(), buf);
}

#[test]
fn resize_file_doubles_and_forces_opacity() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let img = write_gradient_png(&input);

    let summary = resize_file(&options(&input, &output, 2.0)).unwrap();
    assert_eq!((summary.src_w, summary.src_h), (10, 10));
    assert_eq!((summary.out_w, summary.out_h), (20, 20));
    assert!(!summary.aliased);

    let result = load_bitmap(&output).unwrap();
    assert_eq!((result.width(), result.height()), (20, 20));

    // Corners are anchored; everything is opaque.
    assert_eq!(result.pixel(0, 0), pack_argb(img.get_pixel(0, 0).0));
    assert_eq!(result.pixel(19, 19), pack_argb(img.get_pixel(9, 9).0));
    assert!(result.pixels().iter().all(|&c| c >> 24 == 0xFF));
}

#[test]
fn identity_scale_copies_the_file_through() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("same.png");
    write_gradient_png(&input);

    let summary = resize_file(&options(&input, &output, 1.0)).unwrap();
    assert!(summary.aliased);
    assert_eq!((summary.out_w, summary.out_h), (10, 10));

    assert_eq!(load_bitmap(&output).unwrap(), load_bitmap(&input).unwrap());
}

#[test]
fn parallel_run_matches_serial_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    write_gradient_png(&input);

    let serial_out = dir.path().join("serial.png");
    let parallel_out = dir.path().join("parallel.png");

    resize_file(&options(&input, &serial_out, 1.7)).unwrap();
    let mut opts = options(&input, &parallel_out, 1.7);
    opts.parallel = true;
    resize_file(&opts).unwrap();

    assert_eq!(
        load_bitmap(&serial_out).unwrap(),
        load_bitmap(&parallel_out).unwrap()
    );
}

#[test]
fn degenerate_shrink_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("never.png");
    write_gradient_png(&input);

    let err = resize_file(&options(&input, &output, 0.05)).unwrap_err();
    assert!(err.to_string().contains("cannot resample"));
    assert!(!output.exists(), "failed run must not leave an output file");
}

#[test]
fn missing_input_is_a_contextual_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.png");
    let output = dir.path().join("out.png");

    let err = resize_file(&options(&input, &output, 2.0)).unwrap_err();
    assert!(err.to_string().contains("failed to decode"));
}

#[test]
fn in_memory_example_scenario() {
    // The checkerboard scenario end to end, without files: black/white 2x2
    // doubled gives anchored corners and a blended gray interior.
    let src = PixelBuffer::from_pixels(
        2,
        2,
        vec![0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000],
    )
    .unwrap();

    let out = bitmap_resize::resample(&src, 2.0).unwrap();
    assert_eq!((out.width(), out.height()), (4, 4));
    assert_eq!(out.pixel(0, 0), 0xFF000000);
    assert_eq!(out.pixel(3, 3), 0xFF000000);
    assert_eq!(out.pixel(1, 1), 0xFF717171);
}
