//! Frame sources: decoded, orientation-corrected RGB stills

use crate::error::VisionError;
use image::{DynamicImage, RgbImage};
use itemscan_core::Bitmap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Produces one decoded frame per capture
pub trait FrameSource: Send + Sync {
    fn capture_frame(&self) -> Result<Bitmap, VisionError>;

    /// Whether frames come from a handheld live camera rather than a still
    fn is_live(&self) -> bool;
}

/// Convert a decoded image into a [`Bitmap`], dropping any alpha channel
pub fn bitmap_from_image(image: DynamicImage) -> Result<Bitmap, VisionError> {
    bitmap_from_rgb(image.into_rgb8())
}

pub fn bitmap_from_rgb(rgb: RgbImage) -> Result<Bitmap, VisionError> {
    let (width, height) = rgb.dimensions();
    Ok(Bitmap::new(width, height, rgb.into_raw())?)
}

/// Reads a still image from disk on every capture
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    path: PathBuf,
    live: bool,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            live: false,
        }
    }

    /// Treat the file as a camera capture (lower confidence threshold)
    pub fn as_live_capture(mut self) -> Self {
        self.live = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSource for ImageFileSource {
    fn capture_frame(&self) -> Result<Bitmap, VisionError> {
        if !self.path.is_file() {
            return Err(VisionError::FrameSource(format!(
                "Image file not found: {}",
                self.path.display()
            )));
        }

        let image = image::open(&self.path)?;
        let bitmap = bitmap_from_image(image)?;
        info!(
            "Loaded {}x{} frame from {:?}",
            bitmap.width(),
            bitmap.height(),
            self.path
        );
        Ok(bitmap)
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

/// Hands out copies of a frame that is already in memory
#[derive(Debug, Clone)]
pub struct MemoryFrameSource {
    bitmap: Bitmap,
    live: bool,
}

impl MemoryFrameSource {
    pub fn new(bitmap: Bitmap, live: bool) -> Self {
        Self { bitmap, live }
    }
}

impl FrameSource for MemoryFrameSource {
    fn capture_frame(&self) -> Result<Bitmap, VisionError> {
        debug!("Capturing in-memory {}x{} frame", self.bitmap.width(), self.bitmap.height());
        Ok(self.bitmap.clone())
    }

    fn is_live(&self) -> bool {
        self.live
    }
}
