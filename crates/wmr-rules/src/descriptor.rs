//! # Rule Descriptor Model
//!
//! A [`RuleDescriptor`] binds a location in the payload to an ordered list
//! of [`FieldRule`]s. The location is a dotted [`BasePath`] whose first
//! segment names a top-level payload key, together with a declared
//! [`Cardinality`] saying whether that key is a repeating collection.
//!
//! Descriptors are validated when they are built. A descriptor that exists
//! is well-formed, so evaluation has no error path.

use std::fmt;

use wmr_core::{ErrorType, RuleDefinitionError, LABEL_PLACEHOLDER};

use crate::predicates::{Predicate, RuleResult};

/// Whether the root of a base path repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// The root is an array; each element is evaluated with its index.
    Many,
    /// The root is a singleton; the payload is evaluated once, unindexed.
    One,
}

/// A validated, non-empty dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath {
    raw: String,
    segments: Vec<String>,
}

impl BasePath {
    /// Parse a dotted path, rejecting empty paths and empty segments.
    pub fn parse(path: &str) -> Result<Self, RuleDefinitionError> {
        if path.is_empty() {
            return Err(RuleDefinitionError::EmptyBasePath);
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(RuleDefinitionError::EmptySegment {
                path: path.to_string(),
            });
        }
        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// The top-level payload key.
    pub fn root(&self) -> &str {
        // `parse` guarantees at least one segment.
        self.segments.first().map(String::as_str).unwrap_or_default()
    }

    /// All segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One check applied to every element addressed by a descriptor.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: Option<String>,
    predicate: Predicate,
    error_type: ErrorType,
    message: String,
}

impl FieldRule {
    /// A rule whose failure is reported at the element itself.
    pub fn whole(
        error_type: ErrorType,
        message: impl Into<String>,
        predicate: impl Fn(&serde_json::Value) -> RuleResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            field: None,
            predicate: Predicate::new(predicate),
            error_type,
            message: message.into(),
        }
    }

    /// A rule whose failure is reported at `field` below the element.
    pub fn on(
        field: impl Into<String>,
        error_type: ErrorType,
        message: impl Into<String>,
        predicate: impl Fn(&serde_json::Value) -> RuleResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            field: Some(field.into()),
            predicate: Predicate::new(predicate),
            error_type,
            message: message.into(),
        }
    }

    /// Sub-field named in warning paths, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The predicate applied to each element.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Classification of the warnings this rule raises.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Message template containing the label placeholder.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn check(&self, base_path: &BasePath) -> Result<(), RuleDefinitionError> {
        if let Some(field) = &self.field {
            if field.is_empty() || field.split('.').any(str::is_empty) {
                return Err(RuleDefinitionError::InvalidField {
                    base_path: base_path.to_string(),
                    field: field.clone(),
                });
            }
        }
        if !self.message.contains(LABEL_PLACEHOLDER) {
            return Err(RuleDefinitionError::MissingLabelPlaceholder {
                base_path: base_path.to_string(),
                message: self.message.clone(),
            });
        }
        Ok(())
    }
}

/// A payload location and the ordered rules applied to it.
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    name: String,
    base_path: BasePath,
    cardinality: Cardinality,
    rules: Vec<FieldRule>,
}

impl RuleDescriptor {
    /// Build and validate a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RuleDefinitionError`] if the base path is empty or has an
    /// empty segment, if no rules are given, or if any rule has an invalid
    /// field or a message without the `{{ #label }}` placeholder.
    pub fn new(
        name: impl Into<String>,
        base_path: &str,
        cardinality: Cardinality,
        rules: Vec<FieldRule>,
    ) -> Result<Self, RuleDefinitionError> {
        let base_path = BasePath::parse(base_path)?;
        if rules.is_empty() {
            return Err(RuleDefinitionError::NoRules {
                base_path: base_path.to_string(),
            });
        }
        for rule in &rules {
            rule.check(&base_path)?;
        }
        Ok(Self {
            name: name.into(),
            base_path,
            cardinality,
            rules,
        })
    }

    /// Identifier used in logs and rule listings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location this descriptor addresses.
    pub fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Whether the root of the base path repeats.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}
