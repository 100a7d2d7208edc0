use clap::Args;

use super::{parse_colour_arg, Context};
use crate::error::Result;
use crate::output::describe_readability;

/// Contrast ratio between two colours, with WCAG verdicts
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// First colour
    pub first: String,

    /// Second colour
    pub second: String,
}

pub fn run(args: ContrastArgs, ctx: &Context) -> Result<()> {
    let first = parse_colour_arg(&args.first)?;
    let second = parse_colour_arg(&args.second)?;

    if first.a() < 1.0 || second.a() < 1.0 {
        ctx.printer
            .warning("Ignoring", "alpha; contrast is computed on opaque channels");
    }

    let readability = first.readability(&second);
    println!("{}", describe_readability(&readability, &ctx.printer));
    Ok(())
}
