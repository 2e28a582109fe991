//! # Warning Records
//!
//! The single output unit of warning generation. A [`WarningRecord`] is a
//! non-fatal, addressable compliance note: `key` locates the field by dotted
//! traversal, `message` is the human-readable rendering.
//!
//! Records are created fresh for every validation call and never persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WmrError;

/// Placeholder substituted with the human-readable field label.
pub const LABEL_PLACEHOLDER: &str = "{{ #label }}";

/// Classification of a warning.
///
/// This is a closed set. The serialized strings are a client contract and
/// must not change without a versioned API update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// Recommended information is absent.
    NotProvided,
    /// Information is present but incomplete, pending confirmation.
    #[serde(rename = "TBC")]
    Tbc,
}

impl ErrorType {
    /// Returns both variants in declaration order.
    pub fn all() -> &'static [ErrorType] {
        &[Self::NotProvided, Self::Tbc]
    }

    /// Returns the wire identifier for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotProvided => "NotProvided",
            Self::Tbc => "TBC",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = WmrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotProvided" => Ok(Self::NotProvided),
            "TBC" => Ok(Self::Tbc),
            other => Err(WmrError::UnknownVariant {
                kind: "error type",
                value: other.to_string(),
            }),
        }
    }
}

/// A warning raised against one location in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningRecord {
    /// Dotted/indexed machine path, e.g. `wasteItems.0.disposalOrRecoveryCodes.1.code`.
    pub key: String,
    /// Warning classification.
    pub error_type: ErrorType,
    /// Human-readable message with the bracketed label substituted in.
    pub message: String,
}

impl WarningRecord {
    /// Build a record by substituting `label` into a message template.
    pub fn from_template(
        key: impl Into<String>,
        error_type: ErrorType,
        template: &str,
        label: &str,
    ) -> Self {
        Self {
            key: key.into(),
            error_type,
            message: render_message(template, label),
        }
    }
}

impl fmt::Display for WarningRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.error_type, self.key, self.message)
    }
}

/// Substitute every occurrence of [`LABEL_PLACEHOLDER`] in `template`.
pub fn render_message(template: &str, label: &str) -> String {
    template.replace(LABEL_PLACEHOLDER, label)
}
