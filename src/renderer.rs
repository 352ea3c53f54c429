//! Image-to-text rendering: sizing, resampling, then conversion.
//!
//! This is the glue between [`crate::source`] and [`crate::ascii`]. It
//! owns the decision of how many characters an image becomes.

use std::path::Path;

use crate::ascii::{self, ConversionOptions, DEFAULT_CHAR_ASPECT};
use crate::source::{self, Frame, SourceError};

/// Default output width in characters.
pub const DEFAULT_TARGET_WIDTH: u32 = 100;

/// Largest accepted `char_aspect`. Bigger values only stretch the image and
/// can ask the resampler for an enormous buffer.
pub const MAX_CHAR_ASPECT: f64 = 10.0;

/// Settings for one rendering call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Output width in characters
    pub target_width: u32,
    /// Vertical scale for character cells
    pub char_aspect: f64,
    /// Edge detection settings passed to the pipeline
    pub conversion: ConversionOptions,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            char_aspect: DEFAULT_CHAR_ASPECT,
            conversion: ConversionOptions::default(),
        }
    }
}

impl RenderSettings {
    /// Check value ranges before any image work is done.
    ///
    /// Settings may come from a config file, command-line flags or both,
    /// so this runs on the merged result.
    pub fn validate(&self) -> Result<(), String> {
        if self.target_width == 0 {
            return Err("target_width must be at least 1".to_string());
        }
        if !self.conversion.edge_sensitivity.is_finite() {
            return Err(format!(
                "edge_sensitivity must be finite, got {}",
                self.conversion.edge_sensitivity
            ));
        }
        if !(self.char_aspect.is_finite()
            && self.char_aspect > 0.0
            && self.char_aspect <= MAX_CHAR_ASPECT)
        {
            return Err(format!(
                "char_aspect must be greater than 0 and at most {}, got {}",
                MAX_CHAR_ASPECT, self.char_aspect
            ));
        }
        Ok(())
    }
}

/// Render a decoded frame as text.
///
/// The frame is resampled to `target_width` columns and an aspect-corrected
/// number of rows, then converted one character per pixel.
///
/// # Errors
/// Any sizing or conversion error from [`crate::ascii`].
pub fn render_frame(frame: &Frame, settings: &RenderSettings) -> Result<String, SourceError> {
    let (cols, rows) = ascii::calculate_grid(
        frame.width(),
        frame.height(),
        settings.target_width,
        settings.char_aspect,
    )?;
    let grid = frame.resample(cols, rows);
    let pixels = grid.pixels()?;
    let text = ascii::convert(&pixels, &settings.conversion)?;
    log::debug!("rendered {} columns x {} rows", cols, rows);
    Ok(text)
}

/// Load an image file and render it as text.
///
/// # Errors
/// `Open` if the file cannot be decoded, otherwise as [`render_frame`].
pub fn render_file(path: &Path, settings: &RenderSettings) -> Result<String, SourceError> {
    let frame = source::load_image(path)?;
    render_frame(&frame, settings)
}

/// Decode an in-memory image and render it as text.
///
/// # Errors
/// `Decode` if the bytes are not a supported image, otherwise as
/// [`render_frame`].
pub fn render_bytes(bytes: &[u8], settings: &RenderSettings) -> Result<String, SourceError> {
    let frame = source::load_image_from_memory(bytes)?;
    render_frame(&frame, settings)
}
