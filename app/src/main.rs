//! Phone Generator
//!
//! Command-line front end for the generation engine. The worker runs on a
//! background thread; this thread drains its events and prints them.

mod commands;
mod state;

use clap::{ArgAction, Parser, Subcommand};
use engine::GeneratorConfig;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use commands::generate::GenerateArgs;
use state::AppState;

#[derive(Debug, Parser)]
#[command(
    name = "phonegen",
    about = "Generate validated synthetic phone numbers with matching names",
    version
)]
struct Cli {
    /// JSON config file
    #[arg(long, value_name = "path", global = true)]
    config: Option<PathBuf>,
    /// Directory for the per-country files, overrides the config file
    #[arg(long = "output-dir", value_name = "dir", global = true)]
    output_dir: Option<PathBuf>,
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one generation and print every attempt
    Generate(GenerateArgs),
    /// Print the effective configuration
    Config,
    /// List supported countries
    Countries,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    debug!("Using config {:?}", config);

    let mut state = AppState::new(config)?;

    match &cli.command {
        Command::Generate(args) => commands::generate::generate(&mut state, args)?,
        Command::Config => commands::config::show_config(&state)?,
        Command::Countries => commands::config::list_countries(&state),
    }

    Ok(())
}
