//! CLI command implementations for `shorthand`.
//!
//! Each subcommand is implemented in its own module:
//!
//! - [`decode`] -- Decode a shorthand image to text.
//! - [`train`] -- Train a personal model from transcribed samples.
//! - [`status`] -- Configuration diagnostics.

pub mod correct;
pub mod data;
pub mod decode;
pub mod metrics;
pub mod model;
pub mod patterns;
pub mod progress;
pub mod status;
pub mod systems;
pub mod tips;
pub mod train;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};
use tracing::{debug, info};

use shorthand_core::export::ShorthandExport;
use shorthand_core::import_shorthand_data;
use shorthand_llm::{GeminiProvider, ShorthandService};
use shorthand_types::config::Config;
use shorthand_types::{Outcome, SessionState, ShorthandSystem};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SHORTHAND_CONFIG";

/// Load configuration from the given path override or via auto-discovery.
///
/// If `config_override` is provided, loads from that path and fails if it
/// does not exist. Otherwise, uses the discovery chain:
/// 1. `SHORTHAND_CONFIG` env var
/// 2. `~/.shorthand/config.json`
///
/// Returns a default `Config` if no config file is found.
pub async fn load_config(config_override: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path_str) = config_override {
        let path = Path::new(path_str);
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            bail!("config file not found: {path_str}");
        }
        return read_config(path).await;
    }

    let Some(path) = discover_config_path() else {
        info!("no home directory, using default config");
        return Ok(Config::default());
    };
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    read_config(&path).await
}

async fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("failed to read config: {e}"))?;
    let config: Config =
        serde_json::from_str(&contents).map_err(|e| anyhow!("failed to parse config: {e}"))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Discover the config file path (for display in `shorthand status`).
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Some(PathBuf::from(env_path));
    }
    dirs::home_dir().map(|home| home.join(".shorthand").join("config.json"))
}

/// Build the Gemini-backed service, failing fast when no key is configured.
pub fn build_service(config: &Config) -> anyhow::Result<ShorthandService<GeminiProvider>> {
    Ok(ShorthandService::from_config(config)?)
}

/// Turn a failed [`Outcome`] into an error so the process exits non-zero.
pub fn require<T>(outcome: Outcome<T>) -> anyhow::Result<T> {
    outcome.into_result().map_err(|msg| anyhow!(msg))
}

/// Open the session file at `path`, or start a fresh session for `system`.
///
/// Session files use the export format and hold a single system's profile.
pub fn open_session(path: &Path, system: ShorthandSystem) -> anyhow::Result<SessionState> {
    if !path.exists() {
        debug!(path = %path.display(), system = %system, "starting new session");
        return Ok(SessionState::new(system));
    }
    let export = import_shorthand_data(path)?;
    if export.profile.system != system {
        bail!(
            "session file {} holds a {} profile, not {system}",
            path.display(),
            export.profile.system
        );
    }
    Ok(export.into_session())
}

pub fn save_session(path: &Path, session: &mut SessionState) -> anyhow::Result<()> {
    let export = ShorthandExport::from_session(session);
    std::fs::write(path, export.to_json_pretty()?)
        .map_err(|e| anyhow!("failed to write session {}: {e}", path.display()))?;
    debug!(path = %path.display(), "saved session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorthand_types::results::DecodedShorthand;

    #[tokio::test]
    async fn explicit_missing_config_is_error() {
        let err = load_config(Some("/tmp/.shorthand-test-definitely-missing.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[tokio::test]
    async fn config_accepts_camel_and_snake_case() {
        let dir = tempfile::tempdir().unwrap();

        let camel = dir.path().join("camel.json");
        std::fs::write(
            &camel,
            r#"{"vision":{"baseUrl":"http://localhost:1/gen","timeoutSecs":3},"defaults":{"system":"GREGG"}}"#,
        )
        .unwrap();
        let config = load_config(camel.to_str()).await.unwrap();
        assert_eq!(config.vision.base_url, "http://localhost:1/gen");
        assert_eq!(config.vision.timeout_secs, 3);
        assert_eq!(config.defaults.system, ShorthandSystem::Gregg);

        let snake = dir.path().join("snake.json");
        std::fs::write(&snake, r#"{"training":{"steps":4,"step_delay_ms":5}}"#).unwrap();
        let config = load_config(snake.to_str()).await.unwrap();
        assert_eq!(config.training.steps, 4);
        assert_eq!(config.training.step_delay_ms, 5);
    }

    #[tokio::test]
    async fn malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = load_config(path.to_str()).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = open_session(&path, ShorthandSystem::Pitman).unwrap();
        let decoded = DecodedShorthand {
            decoded_text: "see you soon".into(),
            confidence: 81,
            processing_time: 900,
            patterns: Vec::new(),
        };
        session.record_decode(ShorthandSystem::Pitman, &decoded);
        save_session(&path, &mut session).unwrap();

        let reopened = open_session(&path, ShorthandSystem::Pitman).unwrap();
        assert_eq!(reopened.history().len(), 1);
        assert_eq!(reopened.history()[0].decoded_text, "see you soon");

        let err = open_session(&path, ShorthandSystem::Gregg).unwrap_err();
        assert!(err.to_string().contains("PITMAN"));
    }

    #[test]
    fn require_maps_failure() {
        assert_eq!(require(Outcome::Success(1)).unwrap(), 1);
        let err = require::<u8>(Outcome::Failure("nope".into())).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
