//! edgeglyph library crate.
//!
//! Converts still images into ASCII art. The [`ascii`] module is the pure
//! conversion pipeline; [`source`] and [`renderer`] decode, size and feed it.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod renderer;
pub mod source;
