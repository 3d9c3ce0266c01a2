//! Named-color classification of sampled pixels
//!
//! Samples are reduced to a per-channel median, converted to HSV and mapped
//! onto the fixed palette. Near-neutral colors are decided by brightness
//! alone; dark saturated reds and oranges read as brown; everything else
//! goes by hue sector.

use itemscan_core::{NamedColor, Rgb};

/// Saturation below which a color counts as neutral
const GRAYSCALE_MAX_SATURATION: f32 = 0.20;

/// Brightness bands for neutral colors (value on a 0-255 scale)
const BLACK_MAX_VALUE: f32 = 60.0;
const DARK_GRAY_MAX_VALUE: f32 = 120.0;
const GRAY_MAX_VALUE: f32 = 180.0;
const LIGHT_GRAY_MAX_VALUE: f32 = 230.0;

/// Brown: hue in [0, 45), value below 120, saturation above 0.30
const BROWN_MAX_HUE: f32 = 45.0;
const BROWN_MAX_VALUE: f32 = 120.0;
const BROWN_MIN_SATURATION: f32 = 0.30;

/// Value above which light variants of a hue are reported
const LIGHT_VARIANT_MIN_VALUE: f32 = 180.0;

/// Pink rather than red when brighter than this and saturation below 0.5
const PINK_MIN_VALUE: f32 = 200.0;
const PINK_MAX_SATURATION: f32 = 0.5;

/// Color in HSV space: hue in degrees `[0, 360)`, saturation in `[0, 1]`,
/// value on the 0-255 channel scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    /// Standard six-sector RGB to HSV conversion
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            hue: normalize_hue(hue),
            saturation,
            value: max,
        }
    }
}

fn normalize_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Maps pixel samples to a [`NamedColor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorClassifier;

impl ColorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a sample set; an empty set is `Unknown`
    pub fn classify(&self, samples: &[Rgb]) -> NamedColor {
        match median_rgb(samples) {
            Some((r, g, b)) => self.classify_hsv(Hsv::from_rgb(r, g, b)),
            None => NamedColor::Unknown,
        }
    }

    /// Palette lookup for an already aggregated color
    pub fn classify_hsv(&self, hsv: Hsv) -> NamedColor {
        let Hsv {
            hue,
            saturation,
            value,
        } = hsv;

        if saturation < GRAYSCALE_MAX_SATURATION {
            return if value < BLACK_MAX_VALUE {
                NamedColor::Black
            } else if value < DARK_GRAY_MAX_VALUE {
                NamedColor::DarkGray
            } else if value < GRAY_MAX_VALUE {
                NamedColor::Gray
            } else if value < LIGHT_GRAY_MAX_VALUE {
                NamedColor::LightGray
            } else {
                NamedColor::White
            };
        }

        if hue < BROWN_MAX_HUE && value < BROWN_MAX_VALUE && saturation > BROWN_MIN_SATURATION {
            return NamedColor::Brown;
        }

        let light = value > LIGHT_VARIANT_MIN_VALUE;
        match hue {
            h if h >= 345.0 || h < 15.0 => {
                if value > PINK_MIN_VALUE && saturation < PINK_MAX_SATURATION {
                    NamedColor::Pink
                } else {
                    NamedColor::Red
                }
            }
            h if h < 45.0 => {
                if light {
                    NamedColor::Orange
                } else {
                    NamedColor::DarkOrange
                }
            }
            h if h < 75.0 => NamedColor::Yellow,
            h if h < 90.0 => NamedColor::YellowGreen,
            h if h < 120.0 => {
                if light {
                    NamedColor::LightGreen
                } else {
                    NamedColor::Green
                }
            }
            h if h < 165.0 => NamedColor::DarkGreen,
            h if h < 195.0 => NamedColor::Cyan,
            h if h < 255.0 => {
                if light {
                    NamedColor::LightBlue
                } else {
                    NamedColor::Blue
                }
            }
            h if h < 285.0 => NamedColor::Purple,
            h if h < 315.0 => NamedColor::Magenta,
            _ => NamedColor::Pink,
        }
    }
}

/// Per-channel median; even counts average the two middle values
pub fn median_rgb(samples: &[Rgb]) -> Option<(f32, f32, f32)> {
    if samples.is_empty() {
        return None;
    }
    let channel = |pick: fn(&Rgb) -> u8| {
        let mut values: Vec<u8> = samples.iter().map(pick).collect();
        values.sort_unstable();
        median_of_sorted(&values)
    };
    Some((channel(|p| p.r), channel(|p| p.g), channel(|p| p.b)))
}

fn median_of_sorted(values: &[u8]) -> f32 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] as f32 + values[mid] as f32) / 2.0
    } else {
        values[mid] as f32
    }
}
