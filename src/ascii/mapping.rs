//! Gray and gradient values to glyph mapping.

use super::charset::SHADING_PALETTE;
use super::edges::{EdgeDirection, Gradient};
use super::error::{check_len, AsciiError};

/// Palette index for a gray value: `floor(gray / 255 * (levels - 1))`,
/// clamped to the palette.
#[inline]
pub fn shading_index(gray: f64, levels: usize) -> usize {
    let top = levels.saturating_sub(1);
    let idx = ((gray / 255.0) * top as f64).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as usize).min(top)
    }
}

/// Flat-shading glyph for a gray value.
#[inline]
pub fn shade_glyph(gray: f64) -> char {
    SHADING_PALETTE[shading_index(gray, SHADING_PALETTE.len())]
}

/// Edge glyph for a gradient angle in degrees.
#[inline]
pub fn direction_glyph(angle: f64) -> char {
    EdgeDirection::from_degrees(angle).glyph()
}

/// Map gray values (and optionally gradients) to glyphs.
///
/// With edge detection off every pixel is flat-shaded from its gray value.
/// With it on, pixels whose gradient magnitude is strictly greater than
/// `sensitivity` take a directional glyph and the rest are flat-shaded.
/// Negative sensitivities are allowed; they simply let every pixel with a
/// non-negative magnitude through.
///
/// # Arguments
/// * `gray` - Gray values (0-255), one per pixel
/// * `gradient` - Sobel output for the same pixels, required in edge mode
/// * `edge_enabled` - Whether to draw edge glyphs at all
/// * `sensitivity` - Magnitude threshold for the edge branch
///
/// # Errors
/// * `NonFiniteSensitivity` if `sensitivity` is NaN or infinite
/// * `MissingGradientData` if `edge_enabled` is set and `gradient` is `None`
/// * `BufferLength` if the gradient fields do not match `gray` in length
pub fn map_to_glyphs(
    gray: &[f64],
    gradient: Option<&Gradient>,
    edge_enabled: bool,
    sensitivity: f64,
) -> Result<Vec<char>, AsciiError> {
    if !sensitivity.is_finite() {
        return Err(AsciiError::NonFiniteSensitivity(sensitivity));
    }

    if !edge_enabled {
        return Ok(gray.iter().map(|&g| shade_glyph(g)).collect());
    }

    let gradient = gradient.ok_or(AsciiError::MissingGradientData)?;
    check_len(gray.len(), gradient.magnitude.len())?;
    check_len(gray.len(), gradient.direction.len())?;

    let glyphs: Vec<char> = gray
        .iter()
        .zip(gradient.magnitude.iter().zip(&gradient.direction))
        .map(|(&g, (&mag, &dir))| {
            if mag > sensitivity {
                direction_glyph(dir)
            } else {
                shade_glyph(g)
            }
        })
        .collect();

    let edge_count = gradient
        .magnitude
        .iter()
        .filter(|&&mag| mag > sensitivity)
        .count();
    log::debug!(
        "{} of {} pixels above edge sensitivity {}",
        edge_count,
        glyphs.len(),
        sensitivity
    );

    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shading_index_bounds() {
        assert_eq!(shading_index(0.0, 10), 0);
        assert_eq!(shading_index(255.0, 10), 9);
        assert_eq!(shading_index(300.0, 10), 9);
        assert_eq!(shading_index(-4.0, 10), 0);
        assert_eq!(shading_index(f64::NAN, 10), 0);
    }

    #[test]
    fn test_shading_index_floors() {
        // 128 / 255 * 9 = 4.517...
        assert_eq!(shading_index(128.0, 10), 4);
        // 28.33 / 255 * 9 = 0.99988 stays at level 0
        assert_eq!(shading_index(28.33, 10), 0);
        assert_eq!(shading_index(28.34, 10), 1);
    }

    #[test]
    fn test_single_level_palette() {
        assert_eq!(shading_index(200.0, 1), 0);
    }

    #[test]
    fn test_edge_mode_below_threshold_shades() {
        let gradient = Gradient {
            magnitude: vec![100.0],
            direction: vec![90.0],
        };
        // Equal to the threshold is not an edge
        let glyphs = map_to_glyphs(&[255.0], Some(&gradient), true, 100.0).unwrap();
        assert_eq!(glyphs, vec!['#']);
    }

    #[test]
    fn test_nan_sensitivity_rejected() {
        let err = map_to_glyphs(&[0.0], None, false, f64::NAN).unwrap_err();
        assert!(matches!(err, AsciiError::NonFiniteSensitivity(_)));
    }

    #[test]
    fn test_gradient_length_mismatch() {
        let gradient = Gradient {
            magnitude: vec![0.0; 3],
            direction: vec![0.0; 3],
        };
        assert_eq!(
            map_to_glyphs(&[0.0; 4], Some(&gradient), true, 10.0),
            Err(AsciiError::BufferLength {
                expected: 4,
                actual: 3
            })
        );
    }
}
