//! `shorthand train` -- train a personal model from transcribed samples.
//!
//! Each `--image` is paired with the `--text` at the same position. At
//! least three pairs are required. Progress is printed as the job runs and
//! Ctrl-C cancels it.
//!
//! # Example
//!
//! ```text
//! shorthand train --system pitman \
//!     --image a.jpg --text "dear sir" \
//!     --image b.jpg --text "yours faithfully" \
//!     --image c.jpg --text "by return of post"
//! ```

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use shorthand_core::TrainingWizard;
use shorthand_core::image::load_image;
use shorthand_llm::TrainingProgress;
use shorthand_types::config::Config;
use shorthand_types::{SessionState, ShorthandSystem, TrainingSample};

use super::{build_service, open_session, require, save_session};

/// Arguments for the `shorthand train` subcommand.
#[derive(Args)]
pub struct TrainArgs {
    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Sample image. Repeat once per sample.
    #[arg(long = "image", required = true)]
    pub images: Vec<PathBuf>,

    /// Transcription of the image at the same position. Repeat once per sample.
    #[arg(long = "text", required = true)]
    pub texts: Vec<String>,

    /// Session file whose profile is updated with the trained accuracy.
    #[arg(long)]
    pub session: Option<PathBuf>,
}

pub async fn run(args: TrainArgs, config: &Config) -> anyhow::Result<()> {
    let system = args.system.unwrap_or(config.defaults.system);
    let samples = collect_samples(system, &args.images, &args.texts)?;
    let sample_count = samples.len();
    let mut session: Option<SessionState> = args
        .session
        .as_deref()
        .map(|path| open_session(path, system))
        .transpose()?;

    let service = build_service(config)?;
    let cancel = CancellationToken::new();
    let (tx, mut rx) = mpsc::channel::<TrainingProgress>(16);

    let printer = tokio::spawn(async move {
        while let Some(progress) = rx.recv().await {
            eprintln!(
                "  step {}/{} ({}%)",
                progress.step, progress.steps, progress.percent
            );
        }
    });

    let interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling training");
            interrupt.cancel();
        }
    });

    eprintln!("Training {} on {sample_count} samples...", system.info().name);
    let outcome = service
        .train_with_progress(system, &samples, &cancel, Some(&tx))
        .await;
    drop(tx);
    watcher.abort();
    if let Err(e) = printer.await {
        debug!(error = %e, "progress printer ended abnormally");
    }

    let model = require(outcome)?;
    println!("Model:     {}", model.model_id);
    println!("Accuracy:  {:.1}%", model.accuracy);
    let meanings: Vec<&str> = model.patterns.iter().map(|p| p.meaning.as_str()).collect();
    println!("Patterns:  {}", meanings.join(", "));

    if let (Some(path), Some(session)) = (&args.session, session.as_mut()) {
        let updated = session
            .profile(system)
            .with_training(model.accuracy, sample_count);
        session.replace_profile(updated);
        save_session(path, session)?;
        info!(path = %path.display(), "session updated");
    }
    Ok(())
}

/// Pair images with transcriptions through the training wizard.
fn collect_samples(
    system: ShorthandSystem,
    images: &[PathBuf],
    texts: &[String],
) -> anyhow::Result<Vec<TrainingSample>> {
    if images.len() != texts.len() {
        bail!(
            "got {} images but {} transcriptions; pass one --text per --image",
            images.len(),
            texts.len()
        );
    }

    let mut wizard = TrainingWizard::new(system);
    for (path, text) in images.iter().zip(texts) {
        wizard.set_image(load_image(path)?)?;
        wizard.next_step();
        wizard.set_transcription(text.as_str());
        wizard.next_step();
        wizard.add_sample()?;
    }
    Ok(wizard.take_samples()?)
}
