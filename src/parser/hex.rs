//! Hex colour parsing.

use crate::error::{Result, TinctError};
use crate::types::colour::round3;
use crate::types::Colour;

/// Parse a `#`-prefixed hex colour.
///
/// Supports formats:
/// - `#RGB` (3 digits, expanded to 6)
/// - `#RGBA` (4 digits, expanded to 8)
/// - `#RRGGBB` (6 digits)
/// - `#RRGGBBAA` (8 digits)
///
/// Alpha is the low byte divided by 255, rounded to three decimals.
pub fn parse_hex(s: &str) -> Result<Colour> {
    let digits = s.strip_prefix('#').ok_or_else(|| invalid_hex(s))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TinctError::parse(format!("Invalid hex digit in colour: {}", s)));
    }

    let expanded = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits.to_string(),
        _ => return Err(invalid_hex(s)),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid_hex(s))?;

    if expanded.len() == 8 {
        let [r, g, b, a] = value.to_be_bytes();
        Ok(Colour::new(
            r as f64,
            g as f64,
            b as f64,
            round3(a as f64 / 255.0),
        ))
    } else {
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Colour::rgb(r as f64, g as f64, b as f64))
    }
}

fn invalid_hex(s: &str) -> TinctError {
    TinctError::parse_with_help(
        format!("Invalid hex colour: {}", s),
        "Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(c: &Colour) -> (f64, f64, f64, f64) {
        (c.r(), c.g(), c.b(), c.a())
    }

    #[test]
    fn test_hex_6digit() {
        let c = parse_hex("#43c403").unwrap();
        assert_eq!(channels(&c), (67.0, 196.0, 3.0, 1.0));
    }

    #[test]
    fn test_hex_3digit() {
        let c = parse_hex("#f3a").unwrap();
        assert_eq!(channels(&c), (255.0, 51.0, 170.0, 1.0));
    }

    #[test]
    fn test_hex_8digit() {
        let c = parse_hex("#43c40399").unwrap();
        assert_eq!(channels(&c), (67.0, 196.0, 3.0, 0.6));
    }

    #[test]
    fn test_hex_4digit() {
        let c = parse_hex("#f008").unwrap();
        // 0x88 / 255 = 0.5333...
        assert_eq!(channels(&c), (255.0, 0.0, 0.0, 0.533));
    }

    #[test]
    fn test_hex_uppercase_digits() {
        let c = parse_hex("#ABCDEF").unwrap();
        assert_eq!(channels(&c), (171.0, 205.0, 239.0, 1.0));
    }

    #[test]
    fn test_hex_rejects_odd_lengths() {
        assert!(parse_hex("#").is_err());
        assert!(parse_hex("#12").is_err());
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#1234567").is_err());
        assert!(parse_hex("#123456789").is_err());
    }

    #[test]
    fn test_hex_rejects_bad_digits() {
        assert!(parse_hex("#ggg").is_err());
        assert!(parse_hex("#+12345").is_err());
        assert!(parse_hex("# 12345").is_err());
    }

    #[test]
    fn test_hex_requires_hash() {
        assert!(parse_hex("ff0000").is_err());
    }
}
