use clap::Args;

use super::{parse_colour_arg, Context};
use crate::error::Result;

/// Invert a colour
#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Colour to invert
    pub colour: String,
}

pub fn run(args: InvertArgs, ctx: &Context) -> Result<()> {
    let inverted = parse_colour_arg(&args.colour)?.invert();
    println!("{}{}", ctx.printer.swatch(&inverted), inverted.to_string_format(ctx.format));
    Ok(())
}
