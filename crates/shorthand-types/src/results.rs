//! Payloads carried by successful service operations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ShorthandError;
use crate::outcome::Outcome;
use crate::pattern::Pattern;
use crate::system::ShorthandSystem;

/// Version tag written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// Text recovered from a shorthand image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedShorthand {
    pub decoded_text: String,
    /// Integer percentage in `0..=100`.
    pub confidence: u8,
    /// Wall-clock time of the decode in milliseconds.
    pub processing_time: u64,
    pub patterns: Vec<Pattern>,
}

/// Outcome of a (simulated) training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainedModel {
    pub model_id: String,
    /// Percentage in `85.0..95.0` for the placeholder trainer.
    pub accuracy: f64,
    pub patterns: Vec<Pattern>,
}

/// Acknowledgement of a submitted correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionAck {
    pub message: String,
}

pub type DecodeResult = Outcome<DecodedShorthand>;
pub type TrainResult = Outcome<TrainedModel>;
pub type CorrectionResult = Outcome<CorrectionAck>;
pub type ImportResult = Outcome<ImportedModel>;

/// Window used when reporting accuracy history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// Window length in days, `None` for unbounded.
    pub fn days(self) -> Option<i64> {
        match self {
            TimeRange::Week => Some(7),
            TimeRange::Month => Some(30),
            TimeRange::Quarter => Some(90),
            TimeRange::All => None,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for TimeRange {
    type Err = ShorthandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            "all" => Ok(TimeRange::All),
            other => Err(ShorthandError::validation(format!(
                "unknown time range: {other} (expected 7d, 30d, 90d or all)"
            ))),
        }
    }
}

/// One dated accuracy measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    pub date: NaiveDate,
    pub accuracy: f64,
}

/// Accuracy report for one system. `history` is ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    pub current: f64,
    /// Signed change over the window, e.g. `"+5%"`.
    pub trend: String,
    pub history: Vec<AccuracyPoint>,
}

/// Serialized form of a user's trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExport {
    pub system: ShorthandSystem,
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub model_data: String,
}

impl ModelExport {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What a successful model import reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedModel {
    pub system: ShorthandSystem,
    pub version: String,
}

/// A single entry in the decoding history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRecord {
    pub id: Uuid,
    pub system: ShorthandSystem,
    pub decoded_text: String,
    pub confidence: u8,
    pub processing_time: u64,
    pub decoded_at: DateTime<Utc>,
}

impl DecodeRecord {
    pub fn from_decode(system: ShorthandSystem, decoded: &DecodedShorthand) -> Self {
        Self {
            id: Uuid::new_v4(),
            system,
            decoded_text: decoded.decoded_text.clone(),
            confidence: decoded.confidence,
            processing_time: decoded.processing_time,
            decoded_at: Utc::now(),
        }
    }
}
