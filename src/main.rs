use clap::Parser;
use miette::Result;
use tinct::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    tinct::cli::run(cli)?;

    Ok(())
}
