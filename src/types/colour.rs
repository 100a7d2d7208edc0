//! Colour value type.

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contrast::{self, Readability, WcagLevel};
use crate::error::{Result, TinctError};
use crate::parser;

use super::{ColourInput, ColourRecord};

/// Default minimum contrast ratio for [`Colour::contrasting_colour`] (WCAG AA body text).
pub const DEFAULT_MIN_RATIO: f64 = 4.5;

/// Output format for [`Colour::to_string_format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `rgb(r,g,b)` or `rgba(r,g,b,a)`
    #[default]
    Rgb,
    /// `#rrggbb` or `#rrggbbaa`
    Hex,
}

impl FromStr for Format {
    type Err = TinctError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Format::Rgb),
            "hex" => Ok(Format::Hex),
            other => Err(TinctError::parse_with_help(
                format!("Unknown colour format: {}", other),
                "Use rgb or hex",
            )),
        }
    }
}

/// An sRGB colour with an alpha channel.
///
/// Channels are stored unclamped: `r`, `g` and `b` are nominally 0-255 and
/// `a` is nominally 0-1, but whatever the input said is kept. Brightness and
/// luminance are computed on first use and cached for the life of the value.
///
/// A `Colour` never changes after construction; every transform returns a
/// new value.
#[derive(Debug, Clone)]
pub struct Colour {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    brightness: OnceCell<f64>,
    luminance: OnceCell<f64>,
}

impl Colour {
    /// Create a colour from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a,
            brightness: OnceCell::new(),
            luminance: OnceCell::new(),
        }
    }

    /// Create an opaque colour.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::rgb(255.0, 255.0, 255.0)
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Build a colour from a string, a partial record, or an existing colour.
    ///
    /// An existing colour is returned as-is.
    pub fn parse(input: impl Into<ColourInput>) -> Result<Self> {
        parser::parse(input.into())
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// The channels as a record.
    pub fn to_record(&self) -> ColourRecord {
        ColourRecord {
            r: Some(self.r),
            g: Some(self.g),
            b: Some(self.b),
            a: Some(self.a),
        }
    }

    /// Render in the given format.
    ///
    /// Channels are rounded to the nearest integer and alpha is left out
    /// entirely when it rounds to fully opaque.
    pub fn to_string_format(&self, format: Format) -> String {
        let [r, g, b] = self.rounded_channels();
        let alpha = (self.a * 255.0).round();
        let opaque = alpha == 255.0;

        match format {
            Format::Rgb if opaque => format!("rgb({},{},{})", r, g, b),
            Format::Rgb => format!("rgba({},{},{},{})", r, g, b, round3(self.a)),
            Format::Hex => {
                let mut hex = format!("#{:02x}{:02x}{:02x}", hex_byte(r), hex_byte(g), hex_byte(b));
                if !opaque {
                    hex.push_str(&format!("{:02x}", hex_byte(alpha as i64)));
                }
                hex
            }
        }
    }

    /// Perceived brightness, `0.299 r + 0.587 g + 0.114 b`. Alpha is ignored.
    pub fn brightness(&self) -> f64 {
        *self
            .brightness
            .get_or_init(|| 0.299 * self.r + 0.587 * self.g + 0.114 * self.b)
    }

    /// WCAG relative luminance. Alpha is ignored.
    pub fn luminance(&self) -> f64 {
        *self
            .luminance
            .get_or_init(|| contrast::relative_luminance(self.r, self.g, self.b))
    }

    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// True when every channel is exactly 255.
    ///
    /// Note the name: this matches white channels, not black ones. The
    /// behaviour is kept for compatibility with existing callers.
    pub fn is_black(&self) -> bool {
        self.r == 255.0 && self.g == 255.0 && self.b == 255.0
    }

    /// True when every channel is exactly 0.
    ///
    /// Like [`Colour::is_black`], the name is the opposite of the test.
    pub fn is_white(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Copy with a new alpha.
    ///
    /// Values in `(1, 100]` are read as percentages. Anything that does not
    /// land in `[0, 1]` is rejected.
    pub fn with_alpha(&self, a: f64) -> Result<Self> {
        let alpha = if a > 1.0 && a <= 100.0 { a / 100.0 } else { a };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(TinctError::invalid(
                format!("Alpha out of range: {}", a),
                "Use a fraction in 0..=1 or a percentage in 1..=100",
            ));
        }
        Ok(Self::new(self.r, self.g, self.b, alpha))
    }

    /// Channel-wise `255 - c`. Alpha is unchanged.
    pub fn invert(&self) -> Self {
        Self::new(255.0 - self.r, 255.0 - self.g, 255.0 - self.b, self.a)
    }

    /// Blend toward black (`p < 0`), white (`p > 0`) or `blend` by `|p|`.
    ///
    /// See [`contrast::shade_blend`].
    pub fn shade_blend(&self, p: f64, blend: Option<&Colour>, linear: bool) -> Result<Self> {
        contrast::shade_blend(self, p, blend, linear)
    }

    /// WCAG contrast ratio against another colour, between 1 and 21.
    pub fn contrast_ratio(&self, other: &Colour) -> f64 {
        contrast::contrast_ratio(self.luminance(), other.luminance())
    }

    /// Check a WCAG level against another colour.
    pub fn is_readable(&self, other: &Colour, level: WcagLevel) -> bool {
        self.contrast_ratio(other) >= level.min_ratio()
    }

    /// Which WCAG levels pass against another colour.
    pub fn readability(&self, other: &Colour) -> Readability {
        Readability::from_ratio(self.contrast_ratio(other))
    }

    /// A colour that reaches [`DEFAULT_MIN_RATIO`] against this one.
    pub fn contrasting_colour(&self, target: Option<&Colour>) -> Self {
        self.contrasting_colour_with_ratio(target, DEFAULT_MIN_RATIO)
    }

    /// A colour that reaches `min_ratio` against this one.
    ///
    /// Without a target this is plain black or white. With a target, the
    /// target is shaded step by step until the ratio is met or it hits pure
    /// black or white. See [`contrast::contrasting_colour`].
    pub fn contrasting_colour_with_ratio(&self, target: Option<&Colour>, min_ratio: f64) -> Self {
        contrast::contrasting_colour(self, target, min_ratio)
    }

    pub(crate) fn rounded_channels(&self) -> [i64; 3] {
        [
            self.r.round() as i64,
            self.g.round() as i64,
            self.b.round() as i64,
        ]
    }
}

/// Round to three decimals, folding `-0` into `0`.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

// Hex output only has two digits per channel.
fn hex_byte(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl Default for Colour {
    fn default() -> Self {
        Self::black()
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_format(Format::Rgb))
    }
}

impl FromStr for Colour {
    type Err = TinctError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_str(s)
    }
}

impl TryFrom<&str> for Colour {
    type Error = TinctError;

    fn try_from(s: &str) -> Result<Self> {
        parser::parse_str(s)
    }
}

impl From<ColourRecord> for Colour {
    fn from(record: ColourRecord) -> Self {
        record.resolve()
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColour {
    Text(String),
    Record(ColourRecord),
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawColour::deserialize(deserializer)? {
            RawColour::Text(text) => parser::parse_str(&text).map_err(serde::de::Error::custom),
            RawColour::Record(record) => Ok(record.resolve()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_opaque() {
        assert_eq!(Colour::rgb(255.0, 0.0, 0.0).to_string(), "rgb(255,0,0)");
        assert_eq!(Colour::black().to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn test_display_alpha() {
        let c = Colour::new(10.0, 20.0, 30.0, 0.6);
        assert_eq!(c.to_string(), "rgba(10,20,30,0.6)");
        assert_eq!(c.to_string_format(Format::Hex), "#0a141e99");

        let c = Colour::new(10.0, 20.0, 30.0, 1.0 / 3.0);
        assert_eq!(c.to_string(), "rgba(10,20,30,0.333)");
    }

    #[test]
    fn test_display_rounds_channels() {
        let c = Colour::rgb(10.4, 10.6, 254.5);
        assert_eq!(c.to_string(), "rgb(10,11,255)");
        assert_eq!(c.to_string_format(Format::Hex), "#0a0bff");
    }

    #[test]
    fn test_display_near_opaque_alpha_is_dropped() {
        let c = Colour::new(1.0, 2.0, 3.0, 0.999);
        assert_eq!(c.to_string(), "rgb(1,2,3)");
        assert_eq!(c.to_string_format(Format::Hex), "#010203");
    }

    #[test]
    fn test_display_out_of_range_channels() {
        let c = Colour::rgb(300.0, -5.0, 0.0);
        assert_eq!(c.to_string(), "rgb(300,-5,0)");
        assert_eq!(c.to_string_format(Format::Hex), "#ff0000");
    }

    #[test]
    fn test_transparent() {
        let c = Colour::transparent();
        assert_eq!(c.to_string(), "rgba(0,0,0,0)");
        assert_eq!(c.to_string_format(Format::Hex), "#00000000");
    }

    #[test]
    fn test_brightness() {
        assert_eq!(Colour::black().brightness(), 0.0);
        assert!((Colour::white().brightness() - 255.0).abs() < 1e-9);
        let c = Colour::rgb(100.0, 0.0, 0.0);
        assert!((c.brightness() - 29.9).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_are_cached() {
        let c = Colour::rgb(51.0, 51.0, 51.0);
        assert!(c.luminance.get().is_none());
        let first = c.luminance();
        assert_eq!(c.luminance.get(), Some(&first));
        assert_eq!(c.luminance(), first);

        assert!(c.brightness.get().is_none());
        c.brightness();
        assert!(c.brightness.get().is_some());
    }

    #[test]
    fn test_transforms_start_with_empty_caches() {
        let c = Colour::rgb(51.0, 51.0, 51.0);
        c.luminance();
        let inverted = c.invert();
        assert!(inverted.luminance.get().is_none());
    }

    #[test]
    fn test_is_dark() {
        assert!(Colour::black().is_dark());
        assert!(!Colour::white().is_dark());
        assert!(Colour::rgb(51.0, 51.0, 51.0).is_dark());
        assert!(!Colour::rgb(204.0, 204.0, 204.0).is_dark());
        assert!(!Colour::rgb(130.0, 130.0, 130.0).is_dark());
    }

    #[test]
    fn test_black_white_names_are_swapped() {
        assert!(Colour::white().is_black());
        assert!(!Colour::white().is_white());
        assert!(Colour::black().is_white());
        assert!(!Colour::black().is_black());
        assert!(!Colour::rgb(1.0, 0.0, 0.0).is_white());
    }

    #[test]
    fn test_with_alpha_fraction() {
        let c = Colour::black().with_alpha(0.5).unwrap();
        assert_eq!(c.a(), 0.5);
        assert_eq!(Colour::black().with_alpha(1.0).unwrap().a(), 1.0);
        assert_eq!(Colour::black().with_alpha(0.0).unwrap().a(), 0.0);
    }

    #[test]
    fn test_with_alpha_percentage() {
        let c = Colour::black().with_alpha(50.0).unwrap();
        assert_eq!(c.a(), 0.5);
        assert_eq!(Colour::black().with_alpha(100.0).unwrap().a(), 1.0);
    }

    #[test]
    fn test_with_alpha_out_of_range() {
        assert!(Colour::black().with_alpha(-0.1).is_err());
        assert!(Colour::black().with_alpha(100.5).is_err());
        assert!(Colour::black().with_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_invert() {
        let c = Colour::new(10.0, 20.0, 30.0, 0.4).invert();
        assert_eq!(c.r(), 245.0);
        assert_eq!(c.g(), 235.0);
        assert_eq!(c.b(), 225.0);
        assert_eq!(c.a(), 0.4);
    }

    #[test]
    fn test_equality_uses_canonical_form() {
        assert_eq!(Colour::rgb(10.2, 0.0, 0.0), Colour::rgb(9.8, 0.0, 0.0));
        assert_eq!(
            Colour::new(0.0, 0.0, 0.0, 0.5),
            Colour::new(0.0, 0.0, 0.0, 0.5001)
        );
        assert_ne!(Colour::black(), Colour::transparent());
        assert_ne!(Colour::black(), Colour::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("rgb".parse::<Format>().unwrap(), Format::Rgb);
        assert_eq!("HEX".parse::<Format>().unwrap(), Format::Hex);
        assert!("hsl".parse::<Format>().is_err());
    }

    #[test]
    fn test_serialize_as_canonical_string() {
        let json = serde_json::to_string(&Colour::new(1.0, 2.0, 3.0, 0.5)).unwrap();
        assert_eq!(json, r#""rgba(1,2,3,0.5)""#);
    }

    #[test]
    fn test_deserialize_text_and_record() {
        let c: Colour = serde_json::from_str(r##""#ff0000""##).unwrap();
        assert_eq!(c, Colour::rgb(255.0, 0.0, 0.0));

        let c: Colour = serde_json::from_str(r#"{"b": 255}"#).unwrap();
        assert_eq!(c, Colour::rgb(0.0, 0.0, 255.0));

        assert!(serde_json::from_str::<Colour>(r#""nope""#).is_err());
    }

    #[test]
    fn test_to_record() {
        let record = Colour::new(1.0, 2.0, 3.0, 0.5).to_record();
        assert_eq!(record.r, Some(1.0));
        assert_eq!(record.a, Some(0.5));
    }
}
