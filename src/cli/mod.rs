//! Command line interface.

pub mod contrast;
pub mod inspect;
pub mod invert;
pub mod pick;
pub mod shade;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{Colour, ColourRecord, Format};

/// tinct - colour contrast and shading tool
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./tinct.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: rgb or hex
    #[arg(long, short, global = true)]
    pub format: Option<Format>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show canonical forms, brightness and luminance of a colour
    Inspect(inspect::InspectArgs),

    /// Contrast ratio between two colours, with WCAG verdicts
    Contrast(contrast::ContrastArgs),

    /// Find a colour that contrasts with a base colour
    Pick(pick::PickArgs),

    /// Shade a colour toward black, white or another colour
    Shade(shade::ShadeArgs),

    /// Invert a colour
    Invert(invert::InvertArgs),
}

/// Settings shared by every subcommand.
pub struct Context {
    pub config: Config,
    pub format: Format,
    pub printer: Printer,
}

impl Context {
    /// Resolve config and flags. Flags win over the config file.
    pub fn new(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = Config::discover(cli.config.as_deref(), &cwd)?;
        let format = cli.format.unwrap_or(config.format);

        Ok(Self {
            config,
            format,
            printer: Printer::new(),
        })
    }
}

/// Run the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(&cli)?;

    match cli.command {
        Commands::Inspect(args) => inspect::run(args, &ctx),
        Commands::Contrast(args) => contrast::run(args, &ctx),
        Commands::Pick(args) => pick::run(args, &ctx),
        Commands::Shade(args) => shade::run(args, &ctx),
        Commands::Invert(args) => invert::run(args, &ctx),
    }
}

/// Parse a colour argument: a colour string, or a JSON record like `{"r": 255}`.
pub fn parse_colour_arg(arg: &str) -> Result<Colour> {
    if arg.trim_start().starts_with('{') {
        Ok(ColourRecord::from_json(arg)?.into())
    } else {
        Colour::parse(arg)
    }
}
