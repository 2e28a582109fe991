//! # Receipt Schema Validation
//!
//! Hard validation of receipt payloads against the embedded JSON Schema
//! (Draft 2020-12), followed by the cross-field constraints a schema cannot
//! express cleanly.
//!
//! ## Trust Boundary
//!
//! A payload that fails here is rejected outright and never reaches warning
//! generation. Every violation is reported, not just the first, so a
//! submitter can fix a payload in one round trip.
//!
//! ## Violation Keys
//!
//! The `jsonschema` crate reports locations as JSON Pointers
//! (`/wasteItems/0/ewcCodes/1`). They are rewritten to the same dotted form
//! warnings use (`wasteItems.0.ewcCodes.1`). For a missing required
//! property the property name is appended, so the key names the field that
//! is absent rather than its parent.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::constraints;

/// Embedded receipt schema source.
pub const RECEIPT_SCHEMA: &str = include_str!("../schemas/receipt.schema.json");

/// Error during receipt validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The payload violated the schema or a hard cross-field constraint.
    #[error("receipt rejected with {} violation(s):\n{violations}", violations.len())]
    Rejected {
        /// Every violation found, schema violations first.
        violations: Violations,
    },

    /// The embedded schema is not valid JSON.
    #[error("schema load error: {reason}")]
    SchemaLoad {
        /// Parser error text.
        reason: String,
    },

    /// The embedded schema could not be compiled.
    #[error("validator build error: {reason}")]
    ValidatorBuild {
        /// Compiler error text.
        reason: String,
    },
}

impl SchemaValidationError {
    /// The violations, when this error is a rejection.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Rejected { violations } => Some(violations),
            _ => None,
        }
    }
}

/// A single hard-validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Dotted path to the offending field; empty for the payload root.
    pub key: String,
    /// Human-readable description.
    pub message: String,
    /// JSON Pointer into the schema, for schema violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,
}

impl Violation {
    /// A violation raised outside the schema.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            schema_path: None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.key, self.message)
        }
    }
}

/// Ordered collection of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled receipt validator.
///
/// ## Thread Safety
///
/// `ReceiptValidator` is `Send + Sync`. The schema is compiled once at
/// construction and the instance can be shared across threads.
pub struct ReceiptValidator {
    validator: Validator,
}

impl ReceiptValidator {
    /// Compile the embedded receipt schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::SchemaLoad`] or
    /// [`SchemaValidationError::ValidatorBuild`] if the embedded schema is
    /// broken. Both indicate a defect in this crate, not in the payload.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let schema: Value = serde_json::from_str(RECEIPT_SCHEMA).map_err(|e| {
            SchemaValidationError::SchemaLoad {
                reason: format!("invalid JSON: {e}"),
            }
        })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaValidationError::ValidatorBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { validator })
    }

    /// Validate a parsed payload.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::Rejected`] listing every schema
    /// violation followed by every hard cross-field violation.
    pub fn validate(&self, payload: &Value) -> Result<(), SchemaValidationError> {
        let mut violations: Vec<Violation> = self
            .validator
            .iter_errors(payload)
            .map(|e| {
                let mut key = pointer_to_key(&e.instance_path.to_string());
                if let ValidationErrorKind::Required { property } = &e.kind {
                    if let Some(name) = property.as_str() {
                        if !key.is_empty() {
                            key.push('.');
                        }
                        key.push_str(name);
                    }
                }
                Violation {
                    key,
                    message: e.to_string(),
                    schema_path: Some(e.schema_path.to_string()),
                }
            })
            .collect();
        violations.extend(constraints::check(payload));

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "receipt rejected");
            Err(SchemaValidationError::Rejected {
                violations: Violations(violations),
            })
        }
    }

    /// Whether `payload` passes hard validation.
    pub fn is_valid(&self, payload: &Value) -> bool {
        self.validator.is_valid(payload) && constraints::check(payload).is_empty()
    }
}

impl fmt::Debug for ReceiptValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptValidator").finish_non_exhaustive()
    }
}

/// Convert a JSON Pointer to a dotted key, unescaping `~1` and `~0`.
pub fn pointer_to_key(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
