use clap::Args;

use super::{parse_colour_arg, Context};
use crate::error::Result;

/// Shade a colour toward black, white or another colour
#[derive(Args, Debug)]
pub struct ShadeArgs {
    /// Colour to shade
    pub colour: String,

    /// Amount from -1 (black) to 1 (white)
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Blend toward this colour instead of black or white
    #[arg(long, short)]
    pub blend: Option<String>,

    /// Mix raw channel values instead of squared ones
    #[arg(long)]
    pub linear: bool,
}

pub fn run(args: ShadeArgs, ctx: &Context) -> Result<()> {
    let colour = parse_colour_arg(&args.colour)?;
    let blend = args.blend.as_deref().map(parse_colour_arg).transpose()?;
    let linear = args.linear || ctx.config.linear;

    let shaded = colour.shade_blend(args.amount, blend.as_ref(), linear)?;
    println!("{}{}", ctx.printer.swatch(&shaded), shaded.to_string_format(ctx.format));
    Ok(())
}
