//! WCAG luminance and contrast, shading, and contrasting-colour search.

mod search;
mod shade;

pub use search::{contrasting_colour, MAX_SEARCH_STEPS};
pub use shade::shade_blend;

use serde::Serialize;

/// Convert an sRGB channel (nominally 0-255) to linear light.
///
/// Uses the 0.03928 knee from the WCAG 2.x definition.
fn srgb_to_linear(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of raw sRGB channels.
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Contrast ratio between two luminances: `(lighter + 0.05) / (darker + 0.05)`.
pub fn contrast_ratio(l0: f64, l1: f64) -> f64 {
    let (lighter, darker) = if l0 > l1 { (l0, l1) } else { (l1, l0) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG 2.x conformance levels for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    /// AA for large text: 3:1
    AaLarge,
    /// AA for body text: 4.5:1
    Aa,
    /// AAA for large text: 4.5:1
    AaaLarge,
    /// AAA for body text: 7:1
    Aaa,
}

impl WcagLevel {
    pub const ALL: [WcagLevel; 4] = [
        WcagLevel::AaLarge,
        WcagLevel::Aa,
        WcagLevel::AaaLarge,
        WcagLevel::Aaa,
    ];

    pub fn min_ratio(self) -> f64 {
        match self {
            WcagLevel::AaLarge => 3.0,
            WcagLevel::Aa | WcagLevel::AaaLarge => 4.5,
            WcagLevel::Aaa => 7.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WcagLevel::AaLarge => "AA large",
            WcagLevel::Aa => "AA",
            WcagLevel::AaaLarge => "AAA large",
            WcagLevel::Aaa => "AAA",
        }
    }
}

/// Pass/fail for every WCAG level at one contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readability {
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

impl Readability {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            pass_aa: ratio >= WcagLevel::Aa.min_ratio(),
            pass_aa_large: ratio >= WcagLevel::AaLarge.min_ratio(),
            pass_aaa: ratio >= WcagLevel::Aaa.min_ratio(),
            pass_aaa_large: ratio >= WcagLevel::AaaLarge.min_ratio(),
        }
    }

    /// Whether a given level passes.
    pub fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::AaLarge => self.pass_aa_large,
            WcagLevel::Aa => self.pass_aa,
            WcagLevel::AaaLarge => self.pass_aaa_large,
            WcagLevel::Aaa => self.pass_aaa,
        }
    }
}
