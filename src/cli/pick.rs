//! Contrasting colour search from the command line.

use clap::Args;

use super::{parse_colour_arg, Context};
use crate::error::{Result, TinctError};

/// Find a colour that contrasts with a base colour
#[derive(Args, Debug)]
pub struct PickArgs {
    /// Background colour to contrast against
    pub base: String,

    /// Starting colour to shade until it contrasts (plain black or white if omitted)
    #[arg(long, short)]
    pub target: Option<String>,

    /// Minimum contrast ratio (defaults to config, then 4.5)
    #[arg(long)]
    pub min_ratio: Option<f64>,
}

pub fn run(args: PickArgs, ctx: &Context) -> Result<()> {
    let base = parse_colour_arg(&args.base)?;
    let target = args.target.as_deref().map(parse_colour_arg).transpose()?;
    let min_ratio = args.min_ratio.unwrap_or(ctx.config.min_ratio);

    if !min_ratio.is_finite() || min_ratio <= 0.0 {
        return Err(TinctError::invalid(
            format!("Minimum ratio must be positive, got {}", min_ratio),
            "WCAG ratios run from 1 to 21",
        ));
    }

    let picked = base.contrasting_colour_with_ratio(target.as_ref(), min_ratio);
    let ratio = base.contrast_ratio(&picked);

    if ratio < min_ratio {
        ctx.printer.warning(
            "Short",
            &format!("best found is {:.2}:1, below {}:1", ratio, min_ratio),
        );
    } else {
        ctx.printer
            .status("Picked", &format!("{:.2}:1 against {}", ratio, base));
    }

    println!("{}{}", ctx.printer.swatch(&picked), picked.to_string_format(ctx.format));
    Ok(())
}
