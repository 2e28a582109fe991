//! # Component Domain: Sources and Kinds
//!
//! Hazardous properties and Persistent Organic Pollutants (POPs) are declared
//! per waste item with the same shape:
//!
//! ```json
//! { "containsPops": true, "sourceOfComponents": "OWN_TESTING",
//!   "components": [{ "name": "Aldrin", "concentration": 12.5 }] }
//! ```
//!
//! [`ComponentKind`] binds each variant to its object and flag field names
//! once, so rules are registered against a variant rather than assembling
//! `contains${Kind}` keys at evaluation time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WmrError;

/// How hazardous or POP component data was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceOfComponents {
    /// No component information was supplied.
    NotProvided,
    /// Supplied by the carrier.
    CarrierProvided,
    /// Derived from published guidance.
    Guidance,
    /// Derived from the receiver's own testing.
    OwnTesting,
}

impl SourceOfComponents {
    /// Returns all sources in canonical order.
    pub fn all() -> &'static [SourceOfComponents] {
        &[
            Self::NotProvided,
            Self::CarrierProvided,
            Self::Guidance,
            Self::OwnTesting,
        ]
    }

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotProvided => "NOT_PROVIDED",
            Self::CarrierProvided => "CARRIER_PROVIDED",
            Self::Guidance => "GUIDANCE",
            Self::OwnTesting => "OWN_TESTING",
        }
    }

    /// Whether this source implies component data should accompany it.
    pub fn is_provided(&self) -> bool {
        !matches!(self, Self::NotProvided)
    }
}

impl std::fmt::Display for SourceOfComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceOfComponents {
    type Err = WmrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_PROVIDED" => Ok(Self::NotProvided),
            "CARRIER_PROVIDED" => Ok(Self::CarrierProvided),
            "GUIDANCE" => Ok(Self::Guidance),
            "OWN_TESTING" => Ok(Self::OwnTesting),
            other => Err(WmrError::UnknownVariant {
                kind: "source of components",
                value: other.to_string(),
            }),
        }
    }
}

/// The two kinds of component declaration carried by a waste item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Hazardous properties (`hazardous.containsHazardous`).
    Hazardous,
    /// Persistent Organic Pollutants (`pops.containsPops`).
    Pops,
}

impl ComponentKind {
    /// Field on the waste item holding this kind's declaration.
    pub fn object_field(&self) -> &'static str {
        match self {
            Self::Hazardous => "hazardous",
            Self::Pops => "pops",
        }
    }

    /// Boolean flag inside the declaration object.
    pub fn flag_field(&self) -> &'static str {
        match self {
            Self::Hazardous => "containsHazardous",
            Self::Pops => "containsPops",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.object_field())
    }
}
