//! Presentation-only translation of canonical labels

use crate::color::NamedColor;

/// Maps canonical object labels and color names to display strings.
///
/// Classification always works on the canonical vocabulary; implementations
/// are consulted only when presenting results.
pub trait Localizer: Send + Sync {
    fn object_label(&self, canonical: &str) -> String;

    fn color_name(&self, color: NamedColor) -> String;
}

/// Returns the canonical English names unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalLocalizer;

impl Localizer for CanonicalLocalizer {
    fn object_label(&self, canonical: &str) -> String {
        canonical.to_string()
    }

    fn color_name(&self, color: NamedColor) -> String {
        color.name().to_string()
    }
}
