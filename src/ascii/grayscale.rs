//! RGBA to gray conversion using an unweighted channel mean.

use super::buffer::PixelBuffer;

/// Gray value of one pixel: `(R + G + B) / 3`, alpha ignored.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

/// Convert an RGBA buffer to a gray field.
///
/// Each entry is the plain mean of the red, green and blue channels, so a
/// pixel with `R = G = B = v` yields exactly `v`. Values lie in `[0, 255]`.
///
/// # Arguments
/// * `pixels` - RGBA buffer, row-major
///
/// # Returns
/// One gray value per pixel, same row-major order as the input.
pub fn to_grayscale(pixels: &PixelBuffer<'_>) -> Vec<f64> {
    let mut gray = Vec::with_capacity(pixels.pixel_count());
    to_grayscale_into(pixels, &mut gray);
    gray
}

/// Convert an RGBA buffer to gray values, reusing an existing buffer.
///
/// # Returns
/// The number of values written.
fn to_grayscale_into(pixels: &PixelBuffer<'_>, buffer: &mut Vec<f64>) -> usize {
    buffer.clear();
    buffer.reserve(pixels.pixel_count());
    buffer.extend(pixels.pixels().map(|px| luminance(px[0], px[1], px[2])));
    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_ignores_alpha() {
        let data = [30, 60, 90, 0, 30, 60, 90, 255];
        let buf = PixelBuffer::new(&data, 2, 1).unwrap();
        assert_eq!(to_grayscale(&buf), vec![60.0, 60.0]);
    }

    #[test]
    fn test_into_reuses_buffer() {
        let data = [255u8; 4];
        let buf = PixelBuffer::new(&data, 1, 1).unwrap();
        let mut out = vec![1.0, 2.0, 3.0];
        assert_eq!(to_grayscale_into(&buf, &mut out), 1);
        assert_eq!(out, vec![255.0]);
    }

    #[test]
    fn test_fractional_mean() {
        assert!((luminance(1, 0, 0) - 1.0 / 3.0).abs() < 1e-12);
    }
}
