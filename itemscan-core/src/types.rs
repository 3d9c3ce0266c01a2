//! Pixel buffers, detections and classification results

use crate::color::NamedColor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Label reported when nothing cleared the confidence threshold
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Number of bytes per pixel in a [`Bitmap`] (interleaved R, G, B)
pub const BYTES_PER_PIXEL: usize = 3;

/// One RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mean of the three channels
    pub fn brightness(&self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }
}

/// Immutable, row-major RGB image without alpha.
///
/// The buffer length always equals `width * height * 3`; the only way to
/// obtain a `Bitmap` is through a constructor that checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap an interleaved RGB buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBitmap`] when either dimension is zero, when
    /// `width * height * 3` overflows, or when the buffer length differs.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::MalformedBitmap(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|p| p.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                Error::MalformedBitmap(format!("{}x{} would overflow the buffer size", width, height))
            })?;

        if data.len() != expected {
            return Err(Error::MalformedBitmap(format!(
                "{}x{} RGB needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        Ok(Self { width, height, data })
    }

    /// Bitmap where every pixel has the same color
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let pixels = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                Error::MalformedBitmap(format!("{}x{} would overflow the buffer size", width, height))
            })?;
        let data = [color.r, color.g, color.b].repeat(pixels);
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = self.data.get(idx..idx + BYTES_PER_PIXEL)?;
        Some(Rgb::new(px[0], px[1], px[2]))
    }
}

/// Integer rectangle lying entirely inside some image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Axis-aligned box in pixel units as reported by a detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Clip the box to a `image_width` x `image_height` image.
    ///
    /// Returns `None` for non-finite coordinates or when nothing of the box
    /// remains inside the image.
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Option<PixelRegion> {
        if !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
        {
            return None;
        }

        let max_x = image_width as f32;
        let max_y = image_height as f32;

        let left = self.x.clamp(0.0, max_x).floor();
        let top = self.y.clamp(0.0, max_y).floor();
        let right = (self.x + self.width).clamp(0.0, max_x).ceil();
        let bottom = (self.y + self.height).clamp(0.0, max_y).ceil();

        if right <= left || bottom <= top {
            return None;
        }

        Some(PixelRegion {
            left: left as u32,
            top: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// One unsorted detector output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl RawDetection {
    pub fn new(label: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }

    /// Reject confidences that are not a finite score in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::InvalidDetection {
                label: self.label.clone(),
                reason: format!("confidence {} is outside [0, 1]", self.confidence),
            });
        }
        Ok(())
    }
}

/// Final output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub item_label: String,
    pub color_name: NamedColor,
    pub confidence: f32,
}

impl DetectionResult {
    pub fn new(item_label: impl Into<String>, color_name: NamedColor, confidence: f32) -> Self {
        Self {
            item_label: item_label.into(),
            color_name,
            confidence,
        }
    }

    /// Fallback when no detection cleared the threshold
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LABEL, NamedColor::Unknown, 0.0)
    }

    /// False only for the [`DetectionResult::unknown`] fallback
    pub fn is_detected(&self) -> bool {
        !(self.item_label == UNKNOWN_LABEL
            && self.color_name == NamedColor::Unknown
            && self.confidence == 0.0)
    }

    /// Whether the caller should suggest capturing the object again
    pub fn needs_recapture(&self, low_confidence_threshold: f32) -> bool {
        self.confidence < low_confidence_threshold
    }
}
