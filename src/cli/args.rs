//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::renderer::RenderSettings;

/// Convert an image to ASCII art, optionally tracing edges with - \ | /
#[derive(Parser, Debug)]
#[command(name = "edgeglyph")]
#[command(version, about = "Render images as ASCII art with edge glyphs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert (png, jpeg, bmp, gif), or - to read stdin
    pub image: Option<PathBuf>,

    /// Output width in characters
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Draw edge glyphs where the gradient is strong
    #[arg(short, long, conflicts_with = "no_edges")]
    pub edges: bool,

    /// Disable edge glyphs even if the config enables them
    #[arg(long)]
    pub no_edges: bool,

    /// Gradient magnitude needed for an edge glyph (higher = fewer edges)
    #[arg(short, long, allow_negative_numbers = true)]
    pub sensitivity: Option<f64>,

    /// Row scale for character cells
    #[arg(long)]
    pub char_aspect: Option<f64>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Overlay command-line flags on settings from the config file.
    /// Flags that were not given leave the config value in place.
    pub fn apply_to(&self, mut settings: RenderSettings) -> RenderSettings {
        if let Some(width) = self.width {
            settings.target_width = width;
        }
        if self.edges {
            settings.conversion.enable_edge_detection = true;
        }
        if self.no_edges {
            settings.conversion.enable_edge_detection = false;
        }
        if let Some(sensitivity) = self.sensitivity {
            settings.conversion.edge_sensitivity = sensitivity;
        }
        if let Some(aspect) = self.char_aspect {
            settings.char_aspect = aspect;
        }
        settings
    }
}
