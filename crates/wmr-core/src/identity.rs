//! # Tracking Identifiers
//!
//! A receipt is correlated across logs by its waste tracking id. The id is
//! opaque to validation: it never influences which warnings are raised.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation identifier for one submitted receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Wrap an externally assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = TrackingId::generate();
        let b = TrackingId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serializes_transparently() {
        let id = TrackingId::new("25XK9P3M");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"25XK9P3M\"");
        assert_eq!(id.to_string(), "25XK9P3M");
    }
}
