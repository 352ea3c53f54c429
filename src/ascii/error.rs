//! Error types for the ASCII conversion pipeline.

/// Errors raised by the pipeline stages.
///
/// Each stage checks only its own inputs and fails fast; nothing here is
/// retried or repaired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AsciiError {
    #[error("invalid dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("edge detection requested without gradient data")]
    MissingGradientData,

    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength {
        /// Length implied by the declared dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    #[error("edge sensitivity must be finite, got {0}")]
    NonFiniteSensitivity(f64),

    #[error("character aspect must be a positive finite number, got {0}")]
    InvalidCharAspect(f64),
}

/// Reject grids with a zero side.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), AsciiError> {
    if width < 1 || height < 1 {
        return Err(AsciiError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Number of elements in a `width` x `height` grid with `per_cell` values
/// each. Sizes that do not fit in `usize` are rejected as dimensions.
pub(crate) fn checked_area(
    width: usize,
    height: usize,
    per_cell: usize,
) -> Result<usize, AsciiError> {
    width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(per_cell))
        .ok_or(AsciiError::InvalidDimensions { width, height })
}

/// Reject buffers whose length disagrees with their declared shape.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), AsciiError> {
    if expected != actual {
        return Err(AsciiError::BufferLength { expected, actual });
    }
    Ok(())
}
