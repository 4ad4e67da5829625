//! `shorthand metrics` -- accuracy history for a system.

use clap::Args;

use shorthand_core::format_confidence_score;
use shorthand_llm::accuracy_metrics;
use shorthand_types::ShorthandSystem;
use shorthand_types::config::Config;
use shorthand_types::results::TimeRange;

/// Arguments for the `shorthand metrics` subcommand.
#[derive(Args)]
pub struct MetricsArgs {
    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Time window: 7d, 30d, 90d or all.
    #[arg(long, default_value_t = TimeRange::default())]
    pub range: TimeRange,

    /// Print the metrics as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MetricsArgs, config: &Config) -> anyhow::Result<()> {
    let system = args.system.unwrap_or(config.defaults.system);
    let metrics = accuracy_metrics(system, args.range);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let label = format_confidence_score(metrics.current);
    println!(
        "{} accuracy: {:.1}% ({}), trend {} over {}",
        system.info().name,
        metrics.current,
        label.label,
        metrics.trend,
        args.range
    );
    for point in &metrics.history {
        println!("  {}  {:.1}%", point.date, point.accuracy);
    }
    Ok(())
}
