//! `shorthand correct` -- submit a corrected transcription.

use std::path::PathBuf;

use clap::Args;

use shorthand_types::ShorthandSystem;
use shorthand_types::config::Config;

use super::{build_service, open_session, require, save_session};

/// Arguments for the `shorthand correct` subcommand.
#[derive(Args)]
pub struct CorrectArgs {
    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Text as originally decoded.
    #[arg(long)]
    pub original: String,

    /// Text as it should have been decoded.
    #[arg(long)]
    pub corrected: String,

    /// Session file whose profile accuracy is nudged up.
    #[arg(long)]
    pub session: Option<PathBuf>,
}

pub async fn run(args: CorrectArgs, config: &Config) -> anyhow::Result<()> {
    let system = args.system.unwrap_or(config.defaults.system);
    let service = build_service(config)?;

    let ack = require(
        service
            .improve_from_correction(&args.original, &args.corrected, system)
            .await,
    )?;
    println!("{}", ack.message);

    if let Some(path) = &args.session {
        let mut session = open_session(path, system)?;
        let updated = session.profile(system).with_correction();
        println!("Accuracy:  {:.1}%", updated.accuracy);
        session.replace_profile(updated);
        save_session(path, &mut session)?;
    }
    Ok(())
}
