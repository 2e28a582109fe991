//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types shared across the workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Malformed rule definitions are programming errors. They are reported
//!   when a rule is constructed, never while a payload is evaluated.
//! - Warning generation itself has no error path: predicates are total.

use thiserror::Error;

/// Top-level error type for receipt validation.
#[derive(Error, Debug)]
pub enum WmrError {
    /// A rule descriptor or field rule was malformed.
    #[error("rule definition error: {0}")]
    RuleDefinition(#[from] RuleDefinitionError),

    /// An enumerated value did not match any known variant.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// The enumeration being parsed (e.g. "source of components").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// A rule descriptor rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleDefinitionError {
    /// The base path was empty.
    #[error("base path must not be empty")]
    EmptyBasePath,

    /// The base path contained an empty segment (e.g. `"wasteItems..code"`).
    #[error("base path {path:?} contains an empty segment")]
    EmptySegment {
        /// The offending base path.
        path: String,
    },

    /// A field rule named an empty (or empty-segment) sub-field.
    #[error("field {field:?} under {base_path:?} is not a valid dotted path")]
    InvalidField {
        /// Base path of the descriptor the rule belongs to.
        base_path: String,
        /// The offending field name.
        field: String,
    },

    /// A message template did not contain the label placeholder.
    #[error("message template {message:?} under {base_path:?} is missing the `{{{{ #label }}}}` placeholder")]
    MissingLabelPlaceholder {
        /// Base path of the descriptor the rule belongs to.
        base_path: String,
        /// The offending template.
        message: String,
    },

    /// A descriptor was built without any field rules.
    #[error("descriptor {base_path:?} declares no field rules")]
    NoRules {
        /// Base path of the empty descriptor.
        base_path: String,
    },
}
