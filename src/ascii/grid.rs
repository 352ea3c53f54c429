//! Assembly of per-pixel glyphs into text rows.

use super::error::{check_dimensions, check_len, checked_area, AsciiError};

/// Line terminator written after every row, including the last.
pub const LINE_TERMINATOR: char = '\n';

/// Join a row-major glyph grid into text.
///
/// Each of the `height` rows is written as `width` glyphs followed by one
/// [`LINE_TERMINATOR`], so the output always ends with a terminator.
///
/// # Errors
/// `InvalidDimensions` if either side is zero or `width * height`
/// overflows, `BufferLength` if `glyphs` does not hold exactly
/// `width * height` entries.
pub fn assemble_grid(glyphs: &[char], width: usize, height: usize) -> Result<String, AsciiError> {
    check_dimensions(width, height)?;
    check_len(checked_area(width, height, 1)?, glyphs.len())?;

    let mut out = String::with_capacity(glyphs.len() + height);
    for row in glyphs.chunks_exact(width) {
        out.extend(row.iter());
        out.push(LINE_TERMINATOR);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell() {
        assert_eq!(assemble_grid(&['#'], 1, 1).unwrap(), "#\n");
    }

    #[test]
    fn test_rows_in_order() {
        let glyphs = ['a', 'b', 'c', 'd', 'e', 'f'];
        assert_eq!(assemble_grid(&glyphs, 3, 2).unwrap(), "abc\ndef\n");
        assert_eq!(assemble_grid(&glyphs, 2, 3).unwrap(), "ab\ncd\nef\n");
    }

    #[test]
    fn test_rejects_bad_shape() {
        assert!(matches!(
            assemble_grid(&['a'; 5], 2, 2),
            Err(AsciiError::BufferLength { .. })
        ));
        assert!(matches!(
            assemble_grid(&[], 0, 0),
            Err(AsciiError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert!(matches!(
            assemble_grid(&[], usize::MAX / 2, 3),
            Err(AsciiError::InvalidDimensions { .. })
        ));
    }
}
