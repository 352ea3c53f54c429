//! ASCII renderer for converting still images to text.
//!
//! The pipeline turns an RGBA buffer into a grid of characters:
//!
//! 1. **Luminance** - unweighted mean of R, G and B
//! 2. **Gradient** - optional Sobel pass with clamp-to-edge borders
//! 3. **Glyph mapping** - shading ramp, or a direction glyph where the
//!    gradient magnitude exceeds the edge sensitivity
//! 4. **Grid assembly** - rows joined with a trailing newline each
//!
//! Decoding and resampling happen before this module; see
//! [`crate::source`].

mod buffer;
mod charset;
mod convert;
mod dimensions;
mod edges;
mod error;
mod grayscale;
mod grid;
mod mapping;

pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use charset::{
    DIAGONAL_DOWN_GLYPH, DIAGONAL_UP_GLYPH, HORIZONTAL_GLYPH, NO_EDGE_GLYPH, SHADING_PALETTE,
    VERTICAL_GLYPH,
};
pub use convert::{convert, ConversionOptions, DEFAULT_EDGE_SENSITIVITY};
pub use dimensions::{calculate_grid, DEFAULT_CHAR_ASPECT};
pub use edges::{compute_gradient, gradient_direction, EdgeDirection, Gradient, SOBEL_X, SOBEL_Y};
pub use error::AsciiError;
pub use grayscale::{luminance, to_grayscale};
pub use grid::{assemble_grid, LINE_TERMINATOR};
pub use mapping::{direction_glyph, map_to_glyphs, shade_glyph, shading_index};
