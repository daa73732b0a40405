use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("blast_fetch=debug,info")
    } else {
        EnvFilter::new("blast_fetch=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Run(args) => {
            cli::run::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Submit(args) => {
            cli::submit::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fetch(args) => {
            cli::fetch::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
