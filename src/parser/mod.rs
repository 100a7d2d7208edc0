//! Colour expression parsing.
//!
//! Text input is lowercased and trimmed, then tried in order:
//!
//! 1. A CSS keyword (`rebeccapurple` is not one; the table is CSS Color Level 3)
//! 2. `transparent`
//! 3. Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! 4. Functional: `rgb(r, g, b)` or `rgba(r, g, b, a)`
//!
//! Anything else is a [`TinctError::Parse`]. Channel values are not clamped.
//!
//! # Usage
//!
//! ```
//! use tinct::parser::parse_str;
//!
//! let colour = parse_str("#43C403").unwrap();
//! assert_eq!(colour.to_string(), "rgb(67,196,3)");
//! ```

mod functional;
mod hex;

pub use functional::parse_functional;
pub use hex::parse_hex;

use log::trace;

use crate::error::{Result, TinctError};
use crate::types::{named, Colour, ColourInput};

/// Resolve any supported input to a colour.
pub fn parse(input: ColourInput) -> Result<Colour> {
    match input {
        ColourInput::Text(text) => parse_str(&text),
        ColourInput::Record(record) => Ok(record.resolve()),
        ColourInput::Colour(colour) => Ok(colour),
    }
}

/// Parse a colour string.
pub fn parse_str(input: &str) -> Result<Colour> {
    let s = input.trim().to_lowercase();

    if let Some(hex) = named::lookup(&s) {
        trace!("keyword {:?} -> #{}", s, hex);
        return parse_hex(&format!("#{}", hex));
    }

    if s == "transparent" {
        return Ok(Colour::transparent());
    }

    match s.chars().next() {
        Some('#') => parse_hex(&s),
        Some('r') => parse_functional(&s),
        Some(_) => Err(TinctError::parse_with_help(
            format!("Unrecognised colour: {}", input.trim()),
            "Use a CSS colour name, #hex, rgb() or rgba()",
        )),
        None => Err(TinctError::parse("Empty colour expression")),
    }
}
