//! Sobel gradient estimation and edge-direction classification.

use rayon::prelude::*;

use super::charset::{
    DIAGONAL_DOWN_GLYPH, DIAGONAL_UP_GLYPH, HORIZONTAL_GLYPH, NO_EDGE_GLYPH, VERTICAL_GLYPH,
};
use super::error::{check_dimensions, check_len, checked_area, AsciiError};

/// Horizontal Sobel kernel. Responds to brightness rising left to right.
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical Sobel kernel. Responds to brightness rising top to bottom.
pub const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Edge direction bucket derived from a gradient angle.
///
/// Eight 45° sectors centred on the cardinal and diagonal directions fold
/// onto four glyphs, since opposite directions draw the same stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Angle outside every sector. Only a NaN angle lands here.
    None,
    /// Around 0° or ±180° (`-`)
    Horizontal,
    /// Around 90° or -90° (`|`)
    Vertical,
    /// Around 45° or -135° (`\`)
    DiagonalDown,
    /// Around 135° or -45° (`/`)
    DiagonalUp,
}

impl EdgeDirection {
    /// Bucket an angle in degrees.
    ///
    /// Sectors are half-open `[lo, hi)`; the horizontal sector wraps as
    /// `[157.5, 180] ∪ [-180, -157.5)`, so every angle in `[-180, 180]`
    /// falls in exactly one bucket.
    pub fn from_degrees(angle: f64) -> Self {
        if (-22.5..22.5).contains(&angle) {
            EdgeDirection::Horizontal
        } else if (22.5..67.5).contains(&angle) {
            EdgeDirection::DiagonalDown
        } else if (67.5..112.5).contains(&angle) {
            EdgeDirection::Vertical
        } else if (112.5..157.5).contains(&angle) {
            EdgeDirection::DiagonalUp
        } else if angle >= 157.5 || angle < -157.5 {
            EdgeDirection::Horizontal
        } else if (-157.5..-112.5).contains(&angle) {
            EdgeDirection::DiagonalDown
        } else if (-112.5..-67.5).contains(&angle) {
            EdgeDirection::Vertical
        } else if (-67.5..-22.5).contains(&angle) {
            EdgeDirection::DiagonalUp
        } else {
            EdgeDirection::None
        }
    }

    /// Glyph drawn for this direction.
    pub fn glyph(self) -> char {
        match self {
            EdgeDirection::None => NO_EDGE_GLYPH,
            EdgeDirection::Horizontal => HORIZONTAL_GLYPH,
            EdgeDirection::Vertical => VERTICAL_GLYPH,
            EdgeDirection::DiagonalDown => DIAGONAL_DOWN_GLYPH,
            EdgeDirection::DiagonalUp => DIAGONAL_UP_GLYPH,
        }
    }
}

/// Per-pixel gradient fields produced by [`compute_gradient`].
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// `sqrt(gx² + gy²)`, unclamped
    pub magnitude: Vec<f64>,
    /// `atan2(gy, gx)` in degrees, range (-180, 180]
    pub direction: Vec<f64>,
}

impl Gradient {
    /// Number of pixels covered.
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }
}

/// Gradient angle in degrees.
///
/// `atan2(0, 0)` is 0°. A result of -180° (or rounding just past ±180°) is
/// reported as 180° so the range stays (-180, 180].
#[inline]
pub fn gradient_direction(gx: f64, gy: f64) -> f64 {
    if gx == 0.0 && gy == 0.0 {
        return 0.0;
    }
    let degrees = gy.atan2(gx).to_degrees();
    if degrees <= -180.0 || degrees > 180.0 {
        180.0
    } else {
        degrees
    }
}

/// Apply both Sobel kernels at `(x, y)` with clamp-to-edge sampling.
///
/// Returns `(gx, gy)`.
fn sobel_at(gray: &[f64], width: usize, height: usize, x: usize, y: usize) -> (f64, f64) {
    let mut gx = 0.0;
    let mut gy = 0.0;

    for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
        // y + ky - 1, clamped into [0, height - 1]
        let py = (y + ky).saturating_sub(1).min(height - 1);
        for kx in 0..3 {
            let px = (x + kx).saturating_sub(1).min(width - 1);
            let val = gray[py * width + px];
            gx += val * row_x[kx];
            gy += val * row_y[kx];
        }
    }

    (gx, gy)
}

/// Apply the Sobel operator to a gray field.
///
/// The kernels used are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
///
/// Neighbours outside the image are clamped to the nearest border pixel, so
/// border pixels get a gradient too and a flat image yields zero everywhere.
/// With these kernels a left-to-right brightness increase gives 0° and a
/// top-to-bottom increase gives 90°.
///
/// Rows are computed in parallel; the output does not depend on scheduling.
///
/// # Arguments
/// * `gray` - Gray values, row-major, length `width * height`
/// * `width` - Width of the field in pixels
/// * `height` - Height of the field in pixels
///
/// # Errors
/// `InvalidDimensions` if either side is zero or `width * height`
/// overflows, `BufferLength` if `gray` does not hold exactly
/// `width * height` values.
pub fn compute_gradient(gray: &[f64], width: usize, height: usize) -> Result<Gradient, AsciiError> {
    check_dimensions(width, height)?;
    check_len(checked_area(width, height, 1)?, gray.len())?;

    let mut magnitude = vec![0.0; gray.len()];
    let mut direction = vec![0.0; gray.len()];

    magnitude
        .par_chunks_mut(width)
        .zip(direction.par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, (mag_row, dir_row))| {
            for x in 0..width {
                let (gx, gy) = sobel_at(gray, width, height, x, y);
                mag_row[x] = (gx * gx + gy * gy).sqrt();
                dir_row[x] = gradient_direction(gx, gy);
            }
        });

    log::debug!("sobel pass over {}x{} field", width, height);

    Ok(Gradient {
        magnitude,
        direction,
    })
}
