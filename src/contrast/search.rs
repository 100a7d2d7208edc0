//! Search for a colour that contrasts with a base colour.
//!
//! Starting from a target colour, the search shades toward black or white in
//! fixed 20% steps until the WCAG ratio against the base is reached. The step
//! is geometric, so the candidate approaches the endpoint it is heading for
//! and the loop ends there if the ratio is still short. The result can
//! overshoot the requested ratio; it is not the closest passing colour.

use log::debug;

use super::shade::blend_toward;
use crate::types::Colour;

/// Upper bound on shading steps.
///
/// A 20% step brings any channel in 0-255 to within rounding of black in 56
/// steps and of white in 25, so a search heading one way always ends well
/// before this. The cap only matters when the direction flips back and forth
/// around the base colour, which happens when neither black nor white reaches
/// the requested ratio.
pub const MAX_SEARCH_STEPS: usize = 100;

const STEP: f64 = 0.2;

/// Find a colour with at least `min_ratio` contrast against `base`.
///
/// With no target the answer is white for dark bases and black otherwise.
/// With a target, the returned colour either meets `min_ratio` or is pure
/// black or white (to the nearest integer channel).
pub fn contrasting_colour(base: &Colour, target: Option<&Colour>, min_ratio: f64) -> Colour {
    let Some(target) = target else {
        return if base.is_dark() {
            Colour::white()
        } else {
            Colour::black()
        };
    };

    let mut candidate = target.clone();
    let mut steps = 0;

    while base.contrast_ratio(&candidate) < min_ratio {
        if steps == MAX_SEARCH_STEPS {
            debug!(
                "contrast search gave up after {} steps at {} (ratio {:.3})",
                steps,
                candidate,
                base.contrast_ratio(&candidate)
            );
            break;
        }

        let lighten = lighten_next(base, &candidate, min_ratio);
        let endpoint = if lighten {
            Colour::white()
        } else {
            Colour::black()
        };
        candidate = blend_toward(&candidate, STEP, &endpoint, false);
        steps += 1;

        debug!(
            "contrast step {}: {} {} (ratio {:.3})",
            steps,
            if lighten { "lighten" } else { "darken" },
            candidate,
            base.contrast_ratio(&candidate)
        );

        if is_endpoint(&candidate) {
            debug!("contrast search reached {} after {} steps", candidate, steps);
            break;
        }
    }

    candidate
}

/// Pick the shading direction for the next step.
///
/// A candidate darker than the base keeps darkening only if black itself
/// clears `min_ratio` against the base; otherwise it turns around. Lighter
/// candidates mirror this against white. Equal luminance goes away from the
/// base: up for dark bases, down for light ones.
fn lighten_next(base: &Colour, candidate: &Colour, min_ratio: f64) -> bool {
    let l = base.luminance();
    let tl = candidate.luminance();

    if tl == l {
        base.is_dark()
    } else if tl < l {
        base.contrast_ratio(&Colour::black()) <= min_ratio
    } else {
        base.contrast_ratio(&Colour::white()) > min_ratio
    }
}

fn is_endpoint(colour: &Colour) -> bool {
    matches!(colour.rounded_channels(), [0, 0, 0] | [255, 255, 255])
}
