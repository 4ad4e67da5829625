//! Shorthand systems and their reference metadata.
//!
//! [`ShorthandSystem`] is a closed set. Every lookup goes through an
//! exhaustive `match`, so an unknown system cannot silently produce empty
//! data: it fails at parse time instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShorthandError;

/// One of the supported shorthand transcription conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShorthandSystem {
    Teeline,
    Pitman,
    Gregg,
}

/// Descriptive metadata for a shorthand system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: [&'static str; 3],
    pub difficulty: Difficulty,
    pub avg_learning_time: &'static str,
    pub used_by: &'static [&'static str],
}

/// How hard a system is to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

const TEELINE_INFO: SystemInfo = SystemInfo {
    name: "Teeline",
    description: "Modern journalistic shorthand system",
    characteristics: ["Linear strokes", "Simplified letters", "Fast writing"],
    difficulty: Difficulty::Beginner,
    avg_learning_time: "2-3 months",
    used_by: &["Journalists", "Students", "Secretaries"],
};

const PITMAN_INFO: SystemInfo = SystemInfo {
    name: "Pitman",
    description: "Geometric shorthand with thickness variations",
    characteristics: ["Thick/thin lines", "Positioning matters", "Precise angles"],
    difficulty: Difficulty::Advanced,
    avg_learning_time: "6-12 months",
    used_by: &["Court reporters", "Professional stenographers"],
};

const GREGG_INFO: SystemInfo = SystemInfo {
    name: "Gregg",
    description: "Cursive shorthand with flowing curves",
    characteristics: ["Curved lines", "Size variations", "Natural flow"],
    difficulty: Difficulty::Intermediate,
    avg_learning_time: "4-6 months",
    used_by: &["Business professionals", "Students", "Note-takers"],
};

impl ShorthandSystem {
    /// Every supported system, in display order.
    pub const ALL: [ShorthandSystem; 3] = [
        ShorthandSystem::Teeline,
        ShorthandSystem::Pitman,
        ShorthandSystem::Gregg,
    ];

    /// The canonical upper-case key (`"TEELINE"`, `"PITMAN"`, `"GREGG"`).
    pub fn key(self) -> &'static str {
        match self {
            ShorthandSystem::Teeline => "TEELINE",
            ShorthandSystem::Pitman => "PITMAN",
            ShorthandSystem::Gregg => "GREGG",
        }
    }

    pub fn info(self) -> &'static SystemInfo {
        match self {
            ShorthandSystem::Teeline => &TEELINE_INFO,
            ShorthandSystem::Pitman => &PITMAN_INFO,
            ShorthandSystem::Gregg => &GREGG_INFO,
        }
    }
}

impl fmt::Display for ShorthandSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShorthandSystem {
    type Err = ShorthandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TEELINE" => Ok(ShorthandSystem::Teeline),
            "PITMAN" => Ok(ShorthandSystem::Pitman),
            "GREGG" => Ok(ShorthandSystem::Gregg),
            other => Err(ShorthandError::validation(format!(
                "unknown shorthand system: {other} (expected TEELINE, PITMAN or GREGG)"
            ))),
        }
    }
}
