//! Borrowed RGBA pixel buffer handed to the pipeline.

use super::error::{check_dimensions, check_len, checked_area, AsciiError};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A dense, row-major RGBA image owned by the caller.
///
/// The pipeline only ever reads through this view. Construction checks that
/// `data.len() == width * height * 4`, so every later stage can index
/// without bounds surprises.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    /// `InvalidDimensions` if either side is zero or the byte count would
    /// overflow, `BufferLength` if the byte count does not match the
    /// dimensions.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, AsciiError> {
        check_dimensions(width, height)?;
        check_len(checked_area(width, height, BYTES_PER_PIXEL)?, data.len())?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate over pixels as `[r, g, b, a]` slices in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &'a [u8]> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let data = vec![0u8; 2 * 3 * 4];
        let buf = PixelBuffer::new(&data, 2, 3).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.pixel_count(), 6);
        assert_eq!(buf.pixels().count(), 6);
    }

    #[test]
    fn test_new_rejects_zero_side() {
        let err = PixelBuffer::new(&[], 0, 4).unwrap_err();
        assert_eq!(
            err,
            AsciiError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        assert_eq!(
            PixelBuffer::new(&[], usize::MAX / 2, 3).unwrap_err(),
            AsciiError::InvalidDimensions {
                width: usize::MAX / 2,
                height: 3
            }
        );
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        // RGB data passed where RGBA is expected
        let data = vec![0u8; 2 * 2 * 3];
        let err = PixelBuffer::new(&data, 2, 2).unwrap_err();
        assert_eq!(
            err,
            AsciiError::BufferLength {
                expected: 16,
                actual: 12
            }
        );
    }
}
