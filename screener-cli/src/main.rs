use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod config;

fn main() {
    if let Err(error) = run() {
        eprintln!("screener error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(&cli.log_level)?;

    let setup_file = cli.setup.as_deref();
    match cli.command.unwrap_or_default() {
        cli::Command::Edit {
            study,
            out,
            library,
        } => {
            let setup = study.resolve(setup_file)?;
            commands::edit(setup, out, library.as_deref()).context("Editing failed")
        }
        cli::Command::Export {
            study,
            out,
            format,
            no_mode_filter,
            brand_color,
        } => {
            let setup = study.resolve(setup_file)?;
            let options = commands::export_options(no_mode_filter);
            let path = commands::export(&setup, &options, format, brand_color, out)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        cli::Command::Preview {
            study,
            no_mode_filter,
        } => {
            let setup = study.resolve(setup_file)?;
            print!(
                "{}",
                commands::preview(&setup, &commands::export_options(no_mode_filter))
            );
            Ok(())
        }
        cli::Command::Library { csv, search, limit } => {
            commands::library(csv.as_deref(), search.as_deref(), limit)
        }
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SCREENER_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
