//! Full image-to-text conversion.

use super::buffer::PixelBuffer;
use super::edges::compute_gradient;
use super::error::AsciiError;
use super::grayscale::to_grayscale;
use super::grid::assemble_grid;
use super::mapping::map_to_glyphs;

/// Default edge sensitivity. Higher values suppress more edges.
pub const DEFAULT_EDGE_SENSITIVITY: f64 = 100.0;

/// Per-conversion settings consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Replace flat shading with directional glyphs on strong gradients
    pub enable_edge_detection: bool,
    /// Gradient magnitude a pixel must exceed to be drawn as an edge
    pub edge_sensitivity: f64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            enable_edge_detection: false,
            edge_sensitivity: DEFAULT_EDGE_SENSITIVITY,
        }
    }
}

/// Convert an already-resampled RGBA buffer to text.
///
/// One character is produced per pixel, so the caller picks the grid size
/// by resampling first. The gradient pass only runs in edge mode.
///
/// # Errors
/// Propagates the first stage error; see [`map_to_glyphs`].
pub fn convert(pixels: &PixelBuffer<'_>, options: &ConversionOptions) -> Result<String, AsciiError> {
    let (width, height) = (pixels.width(), pixels.height());
    let gray = to_grayscale(pixels);

    let gradient = if options.enable_edge_detection {
        Some(compute_gradient(&gray, width, height)?)
    } else {
        None
    };

    let glyphs = map_to_glyphs(
        &gray,
        gradient.as_ref(),
        options.enable_edge_detection,
        options.edge_sensitivity,
    )?;

    log::debug!(
        "converted {}x{} buffer (edges: {})",
        width,
        height,
        options.enable_edge_detection
    );

    assemble_grid(&glyphs, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConversionOptions::default();
        assert!(!opts.enable_edge_detection);
        assert_eq!(opts.edge_sensitivity, 100.0);
    }

    #[test]
    fn test_convert_rejects_infinite_sensitivity() {
        let data = [0u8; 4];
        let buf = PixelBuffer::new(&data, 1, 1).unwrap();
        let opts = ConversionOptions {
            enable_edge_detection: true,
            edge_sensitivity: f64::INFINITY,
        };
        assert!(matches!(
            convert(&buf, &opts),
            Err(AsciiError::NonFiniteSensitivity(_))
        ));
    }
}
