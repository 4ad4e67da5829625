//! `shorthand decode` -- decode a shorthand image to text.
//!
//! Loads and validates the image, sends it to the vision endpoint and
//! prints the decoded text with its confidence. With `--session`, the
//! decode is folded into a persistent profile; with `--export-dir`, the
//! profile and history are exported afterwards.
//!
//! # Example
//!
//! ```text
//! shorthand decode notes.jpg --system teeline
//! shorthand decode notes.jpg --system gregg --json --session gregg.json
//! ```

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use shorthand_core::image::{load_image, preprocess_image_for_ai, to_data_uri};
use shorthand_core::{
    calculate_reading_speed, export_shorthand_data, format_confidence_score,
    validate_image_for_shorthand,
};
use shorthand_types::config::Config;
use shorthand_types::{SessionState, ShorthandSystem};

use super::{build_service, open_session, require, save_session};

/// Arguments for the `shorthand decode` subcommand.
#[derive(Args)]
pub struct DecodeArgs {
    /// Path to a JPEG or PNG image of shorthand.
    pub image: PathBuf,

    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Print the full result envelope as JSON.
    #[arg(long)]
    pub json: bool,

    /// Session file holding the profile and decoding history.
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Export the profile and history to this directory after decoding.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

pub async fn run(args: DecodeArgs, config: &Config) -> anyhow::Result<()> {
    let system = args.system.unwrap_or(config.defaults.system);

    let image = load_image(&args.image)?;
    validate_image_for_shorthand(&image).into_result()?;
    let data_uri = preprocess_image_for_ai(to_data_uri(&image));

    let mut session = match &args.session {
        Some(path) => open_session(path, system)?,
        None => SessionState::new(system),
    };
    let profile = args.session.is_some().then(|| session.profile(system).clone());

    let service = build_service(config)?;
    let outcome = service
        .decode_image(&data_uri, system, profile.as_ref())
        .await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    let decoded = require(outcome)?;

    if !args.json {
        let label = format_confidence_score(f64::from(decoded.confidence));
        println!("{}", decoded.decoded_text);
        println!();
        println!("System:      {}", system.info().name);
        println!("Confidence:  {}% ({})", decoded.confidence, label.label);
        println!("Time:        {} ms", decoded.processing_time);
        if let Some(wpm) = calculate_reading_speed(&decoded.decoded_text, decoded.processing_time) {
            println!("Speed:       {wpm} words/min");
        }
        if !decoded.patterns.is_empty() {
            let meanings: Vec<&str> = decoded.patterns.iter().map(|p| p.meaning.as_str()).collect();
            println!("Patterns:    {}", meanings.join(", "));
        }
    }

    session.record_decode(system, &decoded);
    if let Some(path) = &args.session {
        save_session(path, &mut session)?;
        info!(path = %path.display(), "session updated");
    }
    if let Some(dir) = &args.export_dir {
        let profile = session.profile(system).clone();
        let written = export_shorthand_data(&profile, session.history(), dir)?;
        eprintln!("Exported to {}", written.display());
    }

    Ok(())
}
