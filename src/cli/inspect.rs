use clap::Args;

use super::{parse_colour_arg, Context};
use crate::error::Result;
use crate::output::describe;

/// Show canonical forms, brightness and luminance of a colour
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Colour to inspect (name, #hex, rgb(), rgba() or a JSON record)
    pub colour: String,
}

pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let colour = parse_colour_arg(&args.colour)?;
    println!("{}", describe(&colour, ctx.format, &ctx.printer));
    Ok(())
}
