//! # shorthand-types
//!
//! Core type definitions for the shorthand decoding toolkit.
//!
//! Every other crate in the workspace depends on this one. It contains:
//!
//! - **[`system`]** -- [`ShorthandSystem`] and per-system metadata
//! - **[`pattern`]** -- symbol patterns and the reference pattern library
//! - **[`profile`]** -- [`UserProfile`] and its update rules
//! - **[`sample`]** -- image files and training samples
//! - **[`outcome`]** -- the `{success, ...}` result envelope
//! - **[`results`]** -- payloads for decode, train, metrics and model export
//! - **[`session`]** -- explicit in-memory session state
//! - **[`config`]** -- configuration schema
//! - **[`error`]** -- [`ShorthandError`]

pub mod config;
pub mod error;
pub mod outcome;
pub mod pattern;
pub mod profile;
pub mod results;
pub mod sample;
pub mod secret;
pub mod session;
pub mod system;

pub use error::{Result, ShorthandError};
pub use outcome::Outcome;
pub use pattern::{Pattern, PatternCategory};
pub use profile::{ProfileStatus, UserProfile};
pub use sample::{ImageFile, TrainingSample};
pub use session::SessionState;
pub use system::ShorthandSystem;
