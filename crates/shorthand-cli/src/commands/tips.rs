//! `shorthand tips` -- practice advice for a system and accuracy level.

use clap::Args;

use shorthand_core::generate_shorthand_tips;
use shorthand_types::ShorthandSystem;
use shorthand_types::config::Config;

/// Arguments for the `shorthand tips` subcommand.
#[derive(Args)]
pub struct TipsArgs {
    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Current decoding accuracy, in percent.
    #[arg(long)]
    pub accuracy: f64,
}

pub fn run(args: TipsArgs, config: &Config) {
    let system = args.system.unwrap_or(config.defaults.system);
    println!("Tips for {} at {:.1}% accuracy:", system.info().name, args.accuracy);
    for tip in generate_shorthand_tips(system, args.accuracy) {
        println!("  - {tip}");
    }
}
