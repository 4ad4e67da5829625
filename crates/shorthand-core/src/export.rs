//! Profile and history export/import.
//!
//! An export is a pretty-printed JSON document named
//! `shorthand_{SYSTEM}_{YYYY-MM-DD}.json` holding the profile, the decoding
//! history, the export timestamp and a format version.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shorthand_types::results::{DecodeRecord, EXPORT_VERSION};
use shorthand_types::{Result, SessionState, ShorthandError, ShorthandSystem, UserProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShorthandExport {
    pub profile: UserProfile,
    #[serde(default)]
    pub decoding_history: Vec<DecodeRecord>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl ShorthandExport {
    pub fn new(profile: UserProfile, decoding_history: Vec<DecodeRecord>) -> Self {
        Self {
            profile,
            decoding_history,
            export_date: Utc::now(),
            version: EXPORT_VERSION.into(),
        }
    }

    /// Snapshot the active system's profile and history from `session`.
    pub fn from_session(session: &mut SessionState) -> Self {
        let system = session.active_system();
        let profile = session.profile(system).clone();
        Self::new(profile, session.history().to_vec())
    }

    /// Rebuild a session around the imported profile and history.
    pub fn into_session(self) -> SessionState {
        let mut session = SessionState::new(self.profile.system);
        session.replace_profile(self.profile);
        session.set_history(self.decoding_history);
        session
    }

    pub fn file_name(&self) -> String {
        export_file_name(self.profile.system, self.export_date.date_naive())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File name for an export of `system` made on `date`.
pub fn export_file_name(system: ShorthandSystem, date: NaiveDate) -> String {
    format!("shorthand_{}_{}.json", system, date.format("%Y-%m-%d"))
}

/// Write `profile` and `history` into `dir`, returning the written path.
pub fn export_shorthand_data(
    profile: &UserProfile,
    history: &[DecodeRecord],
    dir: &Path,
) -> Result<PathBuf> {
    let export = ShorthandExport::new(profile.clone(), history.to_vec());
    let path = dir.join(export.file_name());
    std::fs::write(&path, export.to_json_pretty()?)?;
    info!(
        system = %profile.system,
        records = history.len(),
        path = %path.display(),
        "exported shorthand data"
    );
    Ok(path)
}

/// Parse export JSON.
pub fn parse_shorthand_data(contents: &str) -> Result<ShorthandExport> {
    serde_json::from_str(contents).map_err(|e| {
        warn!(error = %e, "rejected shorthand import");
        ShorthandError::parse("Invalid file format")
    })
}

/// Read an export file written by [`export_shorthand_data`].
pub fn import_shorthand_data(path: &Path) -> Result<ShorthandExport> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to read import file");
        ShorthandError::validation("Failed to read file")
    })?;
    parse_shorthand_data(&contents)
}
