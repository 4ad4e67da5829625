//! In-memory session state.
//!
//! [`SessionState`] owns every profile and the decoding history for one
//! user session. Service calls take profiles by reference and return new
//! values; the session is where the caller stores them.

use std::collections::BTreeMap;

use crate::profile::UserProfile;
use crate::results::{DecodeRecord, DecodedShorthand};
use crate::system::ShorthandSystem;

#[derive(Debug, Clone)]
pub struct SessionState {
    profiles: BTreeMap<ShorthandSystem, UserProfile>,
    history: Vec<DecodeRecord>,
    active_system: ShorthandSystem,
}

impl SessionState {
    pub fn new(active_system: ShorthandSystem) -> Self {
        Self {
            profiles: BTreeMap::new(),
            history: Vec::new(),
            active_system,
        }
    }

    pub fn active_system(&self) -> ShorthandSystem {
        self.active_system
    }

    pub fn set_active_system(&mut self, system: ShorthandSystem) {
        self.active_system = system;
    }

    /// The profile for `system`, created on first access.
    pub fn profile(&mut self, system: ShorthandSystem) -> &UserProfile {
        self.profiles
            .entry(system)
            .or_insert_with(|| UserProfile::starter(system))
    }

    /// Profile for `system` only if it has already been created.
    pub fn existing_profile(&self, system: ShorthandSystem) -> Option<&UserProfile> {
        self.profiles.get(&system)
    }

    /// Store an updated profile, keyed by its own system.
    pub fn replace_profile(&mut self, profile: UserProfile) {
        self.profiles.insert(profile.system, profile);
    }

    /// Fold a successful decode into the profile and append it to history.
    pub fn record_decode(&mut self, system: ShorthandSystem, decoded: &DecodedShorthand) -> &DecodeRecord {
        let updated = self.profile(system).with_decode(decoded.processing_time);
        self.replace_profile(updated);
        self.history.push(DecodeRecord::from_decode(system, decoded));
        // just pushed
        &self.history[self.history.len() - 1]
    }

    /// Decoding history, oldest first.
    pub fn history(&self) -> &[DecodeRecord] {
        &self.history
    }

    /// Replace history wholesale, e.g. after an import.
    pub fn set_history(&mut self, history: Vec<DecodeRecord>) {
        self.history = history;
    }

    /// History entries for one system.
    pub fn history_for(&self, system: ShorthandSystem) -> impl Iterator<Item = &DecodeRecord> {
        self.history.iter().filter(move |r| r.system == system)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ShorthandSystem::Teeline)
    }
}
