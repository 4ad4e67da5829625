//! `shorthand patterns` -- browse a system's pattern library.

use clap::Args;

use shorthand_core::library::{PatternQuery, summarize_library};
use shorthand_types::config::Config;
use shorthand_types::{PatternCategory, ShorthandSystem};

/// Arguments for the `shorthand patterns` subcommand.
#[derive(Args)]
pub struct PatternsArgs {
    /// Shorthand system (TEELINE, PITMAN, GREGG). Defaults to the configured system.
    #[arg(long)]
    pub system: Option<ShorthandSystem>,

    /// Only show one category (common, endings, letters, blends, vowels).
    #[arg(long)]
    pub category: Option<PatternCategory>,

    /// Case-insensitive search on the pattern meaning.
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run(args: PatternsArgs, config: &Config) {
    let system = args.system.unwrap_or(config.defaults.system);
    let summary = summarize_library(system);
    let query = PatternQuery {
        search: args.search,
        category: args.category,
    };
    let matches = query.run(system);

    println!(
        "{} library: {} patterns in {} categories, {:.0}% average confidence",
        system.info().name,
        summary.total,
        summary.category_count,
        summary.average_confidence
    );
    println!();

    if matches.is_empty() {
        println!("No patterns match.");
        return;
    }
    for pattern in matches {
        println!(
            "  {:<6} {:<24} {:<8} {:.0}%",
            pattern.symbol,
            pattern.meaning,
            pattern.category.label(),
            pattern.confidence * 100.0
        );
    }
}
