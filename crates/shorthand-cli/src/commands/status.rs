//! `shorthand status` -- show configuration status and diagnostics.
//!
//! Discovers the active configuration file and prints the endpoint,
//! credential source, training pacing and defaults. The API key itself is
//! never printed.
//!
//! # Example
//!
//! ```text
//! shorthand status
//! shorthand --config ./shorthand.json status
//! ```

use shorthand_types::config::Config;

use super::{CONFIG_ENV, discover_config_path};

pub fn run(config: &Config, config_override: Option<&str>) {
    println!("shorthand status");
    println!("================");
    println!();

    match (config_override, discover_config_path()) {
        (Some(path), _) => println!("Config: {path}"),
        (None, Some(path)) if path.exists() => println!("Config: {}", path.display()),
        (None, _) => {
            println!("Config: not found");
            println!("  Searched: ~/.shorthand/config.json");
            println!("  Set {CONFIG_ENV} env var to override");
            println!();
            println!("Using defaults:");
        }
    }

    let vision = &config.vision;
    let key_source = if !vision.api_key.is_empty() {
        "inline (config file)".to_string()
    } else if std::env::var(&vision.api_key_env).is_ok_and(|v| !v.trim().is_empty()) {
        format!("{} (set)", vision.api_key_env)
    } else {
        format!("{} (NOT SET)", vision.api_key_env)
    };

    println!();
    println!("Vision endpoint:");
    println!("  URL:        {}", vision.base_url);
    println!("  API key:    {key_source}");
    println!("  Timeout:    {} s", vision.timeout_secs);
    println!();
    println!("Training:");
    println!("  Steps:      {}", config.training.steps);
    println!("  Step delay: {} ms", config.training.step_delay_ms);
    println!();
    println!("Defaults:");
    println!("  System:     {}", config.defaults.system);
    println!("  Target:     {:.1}%", config.defaults.target_accuracy);
}
