//! Inputs accepted by [`Colour::parse`].

use serde::{Deserialize, Serialize};

use super::Colour;

/// A partial `{r, g, b, a}` record.
///
/// Missing channels fall back to `r = g = b = 0` and `a = 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColourRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl ColourRecord {
    /// Parse a record from a JSON object such as `{"r": 255, "a": 0.5}`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::TinctError::Parse {
            message: format!("Invalid colour record: {}", e),
            help: Some("Use an object with any of the keys r, g, b, a".to_string()),
        })
    }

    pub(crate) fn resolve(self) -> Colour {
        Colour::new(
            self.r.unwrap_or(0.0),
            self.g.unwrap_or(0.0),
            self.b.unwrap_or(0.0),
            self.a.unwrap_or(1.0),
        )
    }
}

/// Anything that can become a [`Colour`].
#[derive(Debug, Clone)]
pub enum ColourInput {
    /// A keyword, hex or `rgb()`/`rgba()` expression.
    Text(String),
    /// A partial channel record.
    Record(ColourRecord),
    /// An already-built colour, passed through untouched.
    Colour(Colour),
}

impl From<&str> for ColourInput {
    fn from(s: &str) -> Self {
        ColourInput::Text(s.to_string())
    }
}

impl From<String> for ColourInput {
    fn from(s: String) -> Self {
        ColourInput::Text(s)
    }
}

impl From<ColourRecord> for ColourInput {
    fn from(record: ColourRecord) -> Self {
        ColourInput::Record(record)
    }
}

impl From<Colour> for ColourInput {
    fn from(colour: Colour) -> Self {
        ColourInput::Colour(colour)
    }
}
