//! Glyph sets used for shading and edge rendering.

/// Shading ramp (10 levels).
/// Ordered from sparsest (space) to densest ink (#).
pub const SHADING_PALETTE: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '%', '@', '#'];

/// Edge glyph for gradients pointing left or right.
pub const HORIZONTAL_GLYPH: char = '-';
/// Edge glyph for gradients pointing up or down.
pub const VERTICAL_GLYPH: char = '|';
/// Edge glyph for the 45° / -135° diagonal.
pub const DIAGONAL_DOWN_GLYPH: char = '\\';
/// Edge glyph for the 135° / -45° diagonal.
pub const DIAGONAL_UP_GLYPH: char = '/';
/// Sentinel for an angle outside every sector.
pub const NO_EDGE_GLYPH: char = ' ';
