//! Shading and blending toward black, white or another colour.

use crate::error::{Result, TinctError};
use crate::types::Colour;

/// Shade `colour` by `p` in `[-1, 1]`.
///
/// Negative `p` moves toward black and positive toward white, unless a
/// `blend` colour is given, in which case both directions move toward it.
/// The default blend mixes squared channels (`sqrt(P c² + |p| t²)`), which
/// keeps perceived lightness steady; `linear` mixes the raw values instead.
pub fn shade_blend(colour: &Colour, p: f64, blend: Option<&Colour>, linear: bool) -> Result<Colour> {
    if !(-1.0..=1.0).contains(&p) {
        return Err(TinctError::invalid(
            format!("Shade amount out of range: {}", p),
            "Use a number between -1 (black) and 1 (white)",
        ));
    }

    let target = match blend {
        Some(target) => target.clone(),
        None if p < 0.0 => Colour::black(),
        None => Colour::white(),
    };

    Ok(blend_toward(colour, p.abs(), &target, linear))
}

/// Move `colour` toward `target` by `weight` in `[0, 1]`.
pub(super) fn blend_toward(colour: &Colour, weight: f64, target: &Colour, linear: bool) -> Colour {
    let keep = 1.0 - weight;
    let mix = |own: f64, other: f64| {
        if linear {
            keep * own + weight * other
        } else {
            (keep * own * own + weight * other * other).sqrt()
        }
    };

    Colour::new(
        mix(colour.r(), target.r()),
        mix(colour.g(), target.g()),
        mix(colour.b(), target.b()),
        blend_alpha(colour.a(), target.a(), weight),
    )
}

// A negative (or NaN) alpha counts as unset; the other side wins.
fn blend_alpha(own: f64, other: f64, weight: f64) -> f64 {
    match (own >= 0.0, other >= 0.0) {
        (true, true) => own * (1.0 - weight) + other * weight,
        (true, false) => own,
        (false, true) => other,
        (false, false) => 1.0,
    }
}
