//! Image decoding and resampling ahead of the ASCII pipeline.
//!
//! Everything here deals with files and pixel formats; the conversion
//! itself lives in [`crate::ascii`] and only ever sees a [`PixelBuffer`].

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::ascii::{AsciiError, PixelBuffer, BYTES_PER_PIXEL};

/// Filter used when shrinking an image to the character grid.
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Errors that can occur while loading or preparing an image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open image '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("raw RGBA buffer does not match {width}x{height}")]
    RawSize { width: u32, height: u32 },

    #[error(transparent)]
    Ascii(#[from] AsciiError),
}

/// A decoded still image held as 8-bit RGBA.
///
/// Animated formats contribute their first frame only.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    /// Wrap raw row-major RGBA bytes.
    ///
    /// # Errors
    /// `RawSize` if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SourceError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(data.len()) {
            return Err(SourceError::RawSize { width, height });
        }
        RgbaImage::from_raw(width, height, data)
            .map(|image| Self { image })
            .ok_or(SourceError::RawSize { width, height })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Resize to exactly `width` x `height` pixels.
    ///
    /// Returns a copy without filtering when the size already matches.
    pub fn resample(&self, width: u32, height: u32) -> Frame {
        if self.image.dimensions() == (width, height) {
            return self.clone();
        }
        log::debug!(
            "resampling {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        Frame {
            image: imageops::resize(&self.image, width, height, RESAMPLE_FILTER),
        }
    }

    /// Borrow the pixels for conversion.
    ///
    /// # Errors
    /// `InvalidDimensions` for an empty image.
    pub fn pixels(&self) -> Result<PixelBuffer<'_>, AsciiError> {
        PixelBuffer::new(
            self.image.as_raw(),
            self.image.width() as usize,
            self.image.height() as usize,
        )
    }
}

/// Decode an image file.
///
/// The format is guessed from the file contents and extension.
///
/// # Errors
/// `Open` if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<Frame, SourceError> {
    let img = image::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = img.to_rgba8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Frame { image })
}

/// Decode an image held in memory.
///
/// # Errors
/// `Decode` if the bytes are not a supported image.
pub fn load_image_from_memory(bytes: &[u8]) -> Result<Frame, SourceError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    Ok(Frame { image })
}
