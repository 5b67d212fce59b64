//! Command-line trainer for 3x3x3 algorithms and speed solving.

mod cli;
mod net;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();

    cli::exec(args.subcommand)
}
