//! `shorthand` -- CLI binary for decoding shorthand images.
//!
//! Provides the following subcommands:
//!
//! - `shorthand systems` -- List supported shorthand systems.
//! - `shorthand decode` -- Decode an image to text.
//! - `shorthand train` -- Train a personal model from samples.
//! - `shorthand correct` -- Submit a corrected transcription.
//! - `shorthand tips` / `progress` / `patterns` / `metrics` -- Study aids.
//! - `shorthand model` / `data` -- Export and import.
//! - `shorthand status` -- Show configuration status.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shorthand_types::ShorthandSystem;

mod commands;

/// Shorthand decoding CLI.
#[derive(Parser)]
#[command(name = "shorthand", about = "Decode and train on shorthand images", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the supported shorthand systems.
    Systems,

    /// Decode a shorthand image to text.
    Decode(commands::decode::DecodeArgs),

    /// Train a personal model from transcribed samples.
    Train(commands::train::TrainArgs),

    /// Submit a corrected transcription.
    Correct(commands::correct::CorrectArgs),

    /// Practice tips for a system and accuracy level.
    Tips(commands::tips::TipsArgs),

    /// Estimate how many more training samples are needed.
    Progress(commands::progress::ProgressArgs),

    /// Browse the pattern library.
    Patterns(commands::patterns::PatternsArgs),

    /// Show accuracy history.
    Metrics(commands::metrics::MetricsArgs),

    /// Export or import a trained model.
    Model {
        #[command(subcommand)]
        action: ModelCmd,
    },

    /// Inspect exported profile data.
    Data {
        #[command(subcommand)]
        action: DataCmd,
    },

    /// Show configuration status.
    Status,
}

/// Subcommands for `shorthand model`.
#[derive(Subcommand)]
enum ModelCmd {
    /// Export the model for a system.
    Export {
        /// Shorthand system. Defaults to the configured system.
        #[arg(long)]
        system: Option<ShorthandSystem>,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a model export file.
    Import {
        /// Path to the export file.
        file: PathBuf,
    },
}

/// Subcommands for `shorthand data`.
#[derive(Subcommand)]
enum DataCmd {
    /// Read a profile/history export and summarize it.
    Import {
        /// Path to a `shorthand_{SYSTEM}_{DATE}.json` file.
        file: PathBuf,

        /// Print the parsed export as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Systems => commands::systems::run(),
        Commands::Decode(args) => commands::decode::run(args, &config).await?,
        Commands::Train(args) => commands::train::run(args, &config).await?,
        Commands::Correct(args) => commands::correct::run(args, &config).await?,
        Commands::Tips(args) => commands::tips::run(args, &config),
        Commands::Progress(args) => commands::progress::run(args, &config)?,
        Commands::Patterns(args) => commands::patterns::run(args, &config),
        Commands::Metrics(args) => commands::metrics::run(args, &config)?,
        Commands::Model { action } => match action {
            ModelCmd::Export { system, output } => {
                commands::model::export(system, output.as_deref(), &config)?;
            }
            ModelCmd::Import { file } => commands::model::import(&file)?,
        },
        Commands::Data { action } => match action {
            DataCmd::Import { file, json } => commands::data::import(&file, json)?,
        },
        Commands::Status => commands::status::run(&config, cli.config.as_deref()),
    }

    Ok(())
}
