//! Character-grid dimensions for a source image.

use super::error::AsciiError;

/// Default vertical scale applied to the row count.
/// Characters are roughly twice as tall as they are wide, so an image
/// sampled one pixel per character needs about half as many rows.
pub const DEFAULT_CHAR_ASPECT: f64 = 0.55;

/// Calculate the character grid for an image at a fixed target width.
///
/// The height follows the image aspect ratio, scaled by `char_aspect` to
/// compensate for tall character cells:
/// `height = round(target_width * img_height / img_width * char_aspect)`.
/// A result of zero rows is raised to one so very wide images still render.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `target_width` - Output width in characters
/// * `char_aspect` - Vertical scale for character cells (typically 0.55)
///
/// # Returns
/// `(columns, rows)` of the character grid.
///
/// # Errors
/// `InvalidDimensions` if any input side is zero, `InvalidCharAspect` if
/// `char_aspect` is not a positive finite number.
///
/// # Example
/// ```
/// use edgeglyph::ascii::{calculate_grid, DEFAULT_CHAR_ASPECT};
/// // 640x480 at 100 columns: 100 * 0.75 * 0.55 = 41.25 -> 41 rows
/// assert_eq!(calculate_grid(640, 480, 100, DEFAULT_CHAR_ASPECT).unwrap(), (100, 41));
/// ```
pub fn calculate_grid(
    img_width: u32,
    img_height: u32,
    target_width: u32,
    char_aspect: f64,
) -> Result<(u32, u32), AsciiError> {
    if img_width == 0 || img_height == 0 {
        return Err(AsciiError::InvalidDimensions {
            width: img_width as usize,
            height: img_height as usize,
        });
    }
    if target_width == 0 {
        return Err(AsciiError::InvalidDimensions {
            width: 0,
            height: 0,
        });
    }
    if !(char_aspect.is_finite() && char_aspect > 0.0) {
        return Err(AsciiError::InvalidCharAspect(char_aspect));
    }

    let aspect = f64::from(img_height) / f64::from(img_width);
    let rows = (f64::from(target_width) * aspect * char_aspect).round();
    let rows = rows.clamp(1.0, f64::from(u32::MAX)) as u32;

    Ok((target_width, rows))
}
