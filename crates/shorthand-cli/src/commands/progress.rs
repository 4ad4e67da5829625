//! `shorthand progress` -- estimate how many samples training still needs.

use clap::Args;

use shorthand_core::estimate_training_progress;
use shorthand_types::config::Config;

/// Arguments for the `shorthand progress` subcommand.
#[derive(Args)]
pub struct ProgressArgs {
    /// Number of training samples collected so far.
    #[arg(long)]
    pub samples: u32,

    /// Target accuracy in percent. Defaults to the configured target.
    #[arg(long)]
    pub target: Option<f64>,

    /// Print the estimate as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ProgressArgs, config: &Config) -> anyhow::Result<()> {
    let target = args.target.unwrap_or(config.defaults.target_accuracy);
    let estimate = estimate_training_progress(args.samples, target);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("Samples:            {}", args.samples);
    println!("Estimated accuracy: {:.1}%", estimate.current_accuracy);
    println!("Target:             {target:.1}%");
    println!("Samples needed:     {}", estimate.samples_needed);
    println!("Progress:           {:.0}%", estimate.progress);
    Ok(())
}
