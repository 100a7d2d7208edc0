//! `rgb()` / `rgba()` parsing.

use crate::error::{Result, TinctError};
use crate::types::Colour;

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// The prefix only decides where the first number starts: `rgb(` with four
/// components and `rgba(` with three are both accepted, alpha defaulting to
/// 1. The closing parenthesis is optional. Channels must be integers and
/// alpha a finite number. Percentages are rejected.
pub fn parse_functional(s: &str) -> Result<Colour> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(TinctError::parse_with_help(
            format!("rgb() requires 3 or 4 components, got {}: {}", parts.len(), s),
            "Usage: rgb(255, 0, 0) or rgba(255, 0, 0, 0.5)",
        ));
    }

    let first = component(&parts, 0);
    let first = first
        .strip_prefix("rgba(")
        .or_else(|| first.strip_prefix("rgb("))
        .ok_or_else(|| {
            TinctError::parse_with_help(
                format!("Invalid colour function: {}", s),
                "Only rgb() and rgba() are supported",
            )
        })?;

    let r = parse_channel(first)?;
    let g = parse_channel(component(&parts, 1))?;
    let b = parse_channel(component(&parts, 2))?;
    let a = if parts.len() == 4 {
        parse_alpha(component(&parts, 3))?
    } else {
        1.0
    };

    Ok(Colour::new(r, g, b, a))
}

/// A trimmed component; the last one loses its closing parenthesis.
fn component<'a>(parts: &[&'a str], i: usize) -> &'a str {
    let part = parts[i].trim();
    if i + 1 == parts.len() {
        part.strip_suffix(')').map(str::trim_end).unwrap_or(part)
    } else {
        part
    }
}

fn parse_channel(s: &str) -> Result<f64> {
    let s = s.trim();
    s.parse::<i32>().map(f64::from).map_err(|_| {
        if s.ends_with('%') {
            percentage_unsupported(s)
        } else {
            TinctError::parse_with_help(
                format!("Invalid colour channel: '{}'", s),
                "Channels must be integers, e.g. rgb(255, 128, 0)",
            )
        }
    })
}

fn parse_alpha(s: &str) -> Result<f64> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(a) if a.is_finite() => Ok(a),
        _ if s.ends_with('%') => Err(percentage_unsupported(s)),
        _ => Err(TinctError::parse_with_help(
            format!("Invalid alpha: '{}'", s),
            "Alpha must be a number between 0 and 1",
        )),
    }
}

fn percentage_unsupported(s: &str) -> TinctError {
    TinctError::parse_with_help(
        format!("Percentage values are not supported in rgb(): '{}'", s),
        "Convert to 0-255 channels and a 0-1 alpha",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(c: &Colour) -> (f64, f64, f64, f64) {
        (c.r(), c.g(), c.b(), c.a())
    }

    #[test]
    fn test_rgb() {
        let c = parse_functional("rgb(67,196,3)").unwrap();
        assert_eq!(channels(&c), (67.0, 196.0, 3.0, 1.0));
    }

    #[test]
    fn test_rgb_with_spaces() {
        let c = parse_functional("rgb( 1 , 2 , 3 )").unwrap();
        assert_eq!(channels(&c), (1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_rgba() {
        let c = parse_functional("rgba(10, 20, 30, 0.25)").unwrap();
        assert_eq!(channels(&c), (10.0, 20.0, 30.0, 0.25));
    }

    #[test]
    fn test_prefix_and_count_are_independent() {
        let c = parse_functional("rgb(10, 20, 30, .5)").unwrap();
        assert_eq!(c.a(), 0.5);

        let c = parse_functional("rgba(10, 20, 30)").unwrap();
        assert_eq!(c.a(), 1.0);
    }

    #[test]
    fn test_missing_close_paren() {
        let c = parse_functional("rgb(1, 2, 3").unwrap();
        assert_eq!(channels(&c), (1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_channels_are_not_clamped() {
        let c = parse_functional("rgb(300, -20, 0)").unwrap();
        assert_eq!(channels(&c), (300.0, -20.0, 0.0, 1.0));
        assert_eq!(c.to_string(), "rgb(300,-20,0)");
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(parse_functional("rgb(1, 2)").is_err());
        assert!(parse_functional("rgb(1, 2, 3, 4, 5)").is_err());
        assert!(parse_functional("rgb()").is_err());
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(parse_functional("rgb(a, 2, 3)").is_err());
        assert!(parse_functional("rgb(1, , 3)").is_err());
        assert!(parse_functional("rgb(1, 2.5, 3)").is_err());
        assert!(parse_functional("rgba(1, 2, 3, x)").is_err());
        assert!(parse_functional("rgba(1, 2, 3, nan)").is_err());
        assert!(parse_functional("rgba(1, 2, 3, inf)").is_err());
        assert!(parse_functional("rgb(1, 2), 3)").is_err());
    }

    #[test]
    fn test_percentages_rejected() {
        let err = parse_functional("rgb(100%, 0%, 0%)").unwrap_err();
        assert!(err.to_string().contains("Percentage"));
        assert!(parse_functional("rgba(1, 2, 3, 50%)").is_err());
    }

    #[test]
    fn test_unknown_function() {
        assert!(parse_functional("rgx(1, 2, 3)").is_err());
        assert!(parse_functional("r,1,2").is_err());
    }
}
