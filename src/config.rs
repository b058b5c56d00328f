//! # Configuration Module
//!
//! Configuration and validation for resize runs. This is the common
//! interface between the CLI front end and the library entry point.
//!
//! ## Configuration Parameters
//!
//! | Parameter  | Type     | Constraint           | Description                     |
//! |------------|----------|----------------------|---------------------------------|
//! | `input`    | `String` | non-empty path       | Image file to read              |
//! | `output`   | `String` | non-empty path       | Image file to write             |
//! | `scale`    | `f32`    | finite, `> 0`        | Destination/source size ratio   |
//! | `parallel` | `bool`   | true/false           | Fill rows on the rayon pool     |
//!
//! Validation here covers only what can be judged without touching the
//! image: dimension-dependent failures (output below 2x2, source below 2x2)
//! are reported by the resampler core once the input is decoded.

use crate::ResizeOptions;

/// Configuration for a single resize run.
///
/// # Examples
///
/// ```rust
/// use bitmap_resize::config::ResizeConfig;
///
/// let config = ResizeConfig::new("in.png".to_string(), "out.png".to_string(), 1.5, false);
/// assert!(config.validate().is_ok());
///
/// let bad = ResizeConfig::new("in.png".to_string(), "out.png".to_string(), 0.0, false);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Input image path (any format the `image` crate can decode).
    pub input: String,
    /// Output image path; the extension selects the encoder.
    pub output: String,
    /// Scale factor applied to both axes.
    pub scale: f32,
    /// Whether to fill destination rows on the rayon thread pool.
    pub parallel: bool,
}

impl ResizeConfig {
    pub fn new(input: String, output: String, scale: f32, parallel: bool) -> Self {
        Self { input, output, scale, parallel }
    }

    /// Validate the configuration, returning a helpful message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("input path must not be empty".to_string());
        }
        if self.output.is_empty() {
            return Err("output path must not be empty".to_string());
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(format!(
                "scale must be a positive, finite number (got {})",
                self.scale
            ));
        }
        Ok(())
    }

    /// Convert to the options struct consumed by [`crate::resize_file`].
    pub fn to_resize_options(&self) -> ResizeOptions {
        ResizeOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            scale: self.scale,
            parallel: self.parallel,
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            input: "input.png".to_string(),
            output: "resized.png".to_string(),
            scale: 2.0,
            parallel: false,
        }
    }
}
