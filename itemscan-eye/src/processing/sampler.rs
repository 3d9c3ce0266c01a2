//! Pixel sampling inside a detection region
//!
//! The region is shrunk to its central 60% x 60%, walked on a fixed 8-pixel
//! grid, and pixels that are too dark or too bright are dropped. Without a
//! usable region the center 50% x 50% of the frame is used instead.

use itemscan_core::{Bitmap, BoundingBox, PixelRegion, Rgb};

/// Grid spacing, in pixels, along both axes
pub const SAMPLE_STRIDE: usize = 8;

/// Fraction trimmed from each side of the region before sampling
pub const REGION_INSET: f32 = 0.2;

/// Exclusive brightness bounds for kept pixels
pub const MIN_BRIGHTNESS: f32 = 20.0;
pub const MAX_BRIGHTNESS: f32 = 240.0;

/// Collects representative pixels of an object
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSampler;

impl ColorSampler {
    pub fn new() -> Self {
        Self
    }

    /// Sample `region` of `bitmap`, or the frame center when it is `None`.
    ///
    /// Boxes are clamped to the image first; a box with no area left falls
    /// back to the frame center as well. Pixels are returned in row-major
    /// scan order.
    pub fn sample(&self, bitmap: &Bitmap, region: Option<&BoundingBox>) -> Vec<Rgb> {
        let region = self.resolve_region(bitmap, region);
        let (x0, x1) = inset_span(region.left, region.width);
        let (y0, y1) = inset_span(region.top, region.height);

        let mut samples = Vec::new();
        for y in (y0..y1).step_by(SAMPLE_STRIDE) {
            for x in (x0..x1).step_by(SAMPLE_STRIDE) {
                if let Some(px) = bitmap.pixel(x, y) {
                    if is_well_exposed(px) {
                        samples.push(px);
                    }
                }
            }
        }
        samples
    }

    /// Region that will actually be sampled, before the inset
    pub fn resolve_region(&self, bitmap: &Bitmap, region: Option<&BoundingBox>) -> PixelRegion {
        region
            .and_then(|bbox| bbox.clamp_to(bitmap.width(), bitmap.height()))
            .unwrap_or_else(|| center_region(bitmap.width(), bitmap.height()))
    }
}

/// Center 50% x 50% of a frame
fn center_region(width: u32, height: u32) -> PixelRegion {
    let w = (width / 2).max(1);
    let h = (height / 2).max(1);
    PixelRegion {
        left: (width - w) / 2,
        top: (height - h) / 2,
        width: w,
        height: h,
    }
}

/// Half-open `[start, end)` of the central 60% of a span
fn inset_span(start: u32, len: u32) -> (u32, u32) {
    let inset = (len as f32 * REGION_INSET) as u32;
    (start + inset, start + len - inset)
}

fn is_well_exposed(px: Rgb) -> bool {
    let brightness = px.brightness();
    brightness > MIN_BRIGHTNESS && brightness < MAX_BRIGHTNESS
}
