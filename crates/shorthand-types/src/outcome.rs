//! The success-or-failure envelope returned by every service operation.
//!
//! On the wire an [`Outcome`] is either `{"success": true, ...payload}` or
//! `{"success": false, "error": "..."}`. Callers branch on success and never
//! see payload fields on failure.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ShorthandError;

/// Result of a service operation that never propagates its errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// Human-readable failure message.
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The payload, if the operation succeeded.
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, if the operation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(msg) => Some(msg),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(msg) => Err(msg),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(msg) => Outcome::Failure(msg),
        }
    }
}

impl<T> From<Result<T, ShorthandError>> for Outcome<T> {
    fn from(result: Result<T, ShorthandError>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct SuccessRepr<'a, T> {
    success: bool,
    #[serde(flatten)]
    payload: &'a T,
}

#[derive(Serialize)]
struct FailureRepr<'a> {
    success: bool,
    error: &'a str,
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success(payload) => SuccessRepr {
                success: true,
                payload,
            }
            .serialize(serializer),
            Outcome::Failure(error) => FailureRepr {
                success: false,
                error,
            }
            .serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let obj = value
            .as_object_mut()
            .ok_or_else(|| de::Error::custom("outcome must be a JSON object"))?;
        let success = obj
            .remove("success")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| de::Error::missing_field("success"))?;

        if success {
            T::deserialize(value).map(Outcome::Success).map_err(de::Error::custom)
        } else {
            let error = obj
                .get("error")
                .and_then(|v| v.as_str())
                .ok_or_else(|| de::Error::missing_field("error"))?;
            Ok(Outcome::Failure(error.to_owned()))
        }
    }
}
