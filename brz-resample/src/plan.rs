// SPDX-License-Identifier: MIT
/// Geometry planning: output dimensions, per-axis ratios, and every argument
/// check that can fail before a single pixel is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size { pub w: u32, pub h: u32 }

#[derive(Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// Scale factor was zero, negative, NaN or infinite.
    InvalidScale { scale: f32 },
    /// Computed output smaller than 2x2; the edge-anchored ratio formula
    /// divides by `dim - 1` and cannot express it.
    DegenerateOutput { w: u32, h: u32 },
    /// Source smaller than 2x2, or a pixel vector whose length does not
    /// match `width * height`.
    MalformedSource { w: u32, h: u32, pixels: usize },
    /// Destination pixel buffer could not be allocated.
    Allocation { pixels: usize },
}

impl std::fmt::Display for ResampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleError::InvalidScale { scale } => {
                write!(f, "Scale factor must be positive and finite (got {})", scale)
            }
            ResampleError::DegenerateOutput { w, h } => {
                write!(f, "Output dimensions {}x{} too small for bilinear resampling (minimum 2x2)", w, h)
            }
            ResampleError::MalformedSource { w, h, pixels } => {
                write!(f, "Malformed source bitmap: {}x{} with {} pixels", w, h, pixels)
            }
            ResampleError::Allocation { pixels } => {
                write!(f, "Failed to allocate destination buffer of {} pixels", pixels)
            }
        }
    }
}

impl std::error::Error for ResampleError {}

/// Inverse-mapping plan: destination geometry plus the ratios that map each
/// destination index back into source space.
#[derive(Clone, Copy, Debug)]
pub struct ScalePlan {
    pub src: Size,
    pub out: Size,
    /// `(src.w - 1) / (out.w - 1)`: destination column 0 lands on source
    /// column 0 and the last destination column on the last source column.
    pub x_ratio: f32,
    pub y_ratio: f32,
}

/// Validate `src` and `scale` and compute the destination geometry.
///
/// Output dimensions truncate (`floor(dim * scale)`), they do not round.
pub fn build_plan(src: Size, scale: f32) -> Result<ScalePlan, ResampleError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ResampleError::InvalidScale { scale });
    }
    if src.w < 2 || src.h < 2 {
        return Err(ResampleError::MalformedSource {
            w: src.w,
            h: src.h,
            pixels: src.w as usize * src.h as usize,
        });
    }
    let out = Size {
        w: (src.w as f32 * scale) as u32,
        h: (src.h as f32 * scale) as u32,
    };
    if out.w < 2 || out.h < 2 {
        return Err(ResampleError::DegenerateOutput { w: out.w, h: out.h });
    }
    Ok(ScalePlan {
        src,
        out,
        x_ratio: (src.w - 1) as f32 / (out.w - 1) as f32,
        y_ratio: (src.h - 1) as f32 / (out.h - 1) as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dimensions_truncate() {
        let plan = build_plan(Size { w: 7, h: 7 }, 1.5).unwrap();
        assert_eq!(plan.out, Size { w: 10, h: 10 });

        let plan = build_plan(Size { w: 10, h: 10 }, 0.5).unwrap();
        assert_eq!(plan.out, Size { w: 5, h: 5 });

        let plan = build_plan(Size { w: 9, h: 16 }, 3.0).unwrap();
        assert_eq!(plan.out, Size { w: 27, h: 48 });
    }

    #[test]
    fn dimensions_follow_f32_product() {
        // 10 * 1.9f32 rounds up to exactly 19.0 in f32, so truncation keeps 19.
        let plan = build_plan(Size { w: 10, h: 10 }, 1.9).unwrap();
        assert_eq!(plan.out, Size { w: 19, h: 19 });
        assert_eq!(plan.x_ratio, 0.5);
        assert_eq!(plan.y_ratio, 0.5);
    }

    #[test]
    fn ratios_anchor_both_edges() {
        let plan = build_plan(Size { w: 2, h: 2 }, 2.0).unwrap();
        assert_eq!(plan.out, Size { w: 4, h: 4 });
        assert_eq!(plan.x_ratio, 1.0f32 / 3.0);
        assert_eq!(plan.y_ratio, 1.0f32 / 3.0);

        let identity = build_plan(Size { w: 5, h: 3 }, 1.0).unwrap();
        assert_eq!(identity.out, Size { w: 5, h: 3 });
        assert_eq!(identity.x_ratio, 1.0);
        assert_eq!(identity.y_ratio, 1.0);
    }

    #[test]
    fn rejects_invalid_scale() {
        for scale in [0.0, -1.0, -0.25, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = build_plan(Size { w: 4, h: 4 }, scale).unwrap_err();
            assert!(matches!(err, ResampleError::InvalidScale { .. }), "scale {}", scale);
        }
    }

    #[test]
    fn rejects_small_source() {
        let err = build_plan(Size { w: 1, h: 5 }, 2.0).unwrap_err();
        assert_eq!(err, ResampleError::MalformedSource { w: 1, h: 5, pixels: 5 });

        let err = build_plan(Size { w: 5, h: 1 }, 2.0).unwrap_err();
        assert!(matches!(err, ResampleError::MalformedSource { .. }));
    }

    #[test]
    fn rejects_degenerate_output() {
        // 10 * 0.1 truncates to 1, which the ratio formula cannot express.
        let err = build_plan(Size { w: 10, h: 10 }, 0.1).unwrap_err();
        assert_eq!(err, ResampleError::DegenerateOutput { w: 1, h: 1 });

        // 2 * 0.9 truncates to 1.
        let err = build_plan(Size { w: 2, h: 2 }, 0.9).unwrap_err();
        assert!(matches!(err, ResampleError::DegenerateOutput { .. }));
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ResampleError::InvalidScale { scale: -2.0 };
        assert!(err.to_string().contains("-2"));

        let err = ResampleError::MalformedSource { w: 3, h: 2, pixels: 5 };
        assert!(err.to_string().contains("3x2"));
    }
}
