//! # Warning Rule Trait
//!
//! The seam between the aggregator and everything it runs. Generic
//! descriptors and the dedicated cross-field rules both implement
//! [`WarningRule`], so callers cannot tell one origin from the other.

use std::fmt;

use serde_json::Value;
use wmr_core::WarningRecord;

use crate::descriptor::RuleDescriptor;
use crate::evaluator::evaluate;

/// A unit of warning generation.
///
/// Implementations must be total: any payload shape yields a (possibly
/// empty) list, never a panic. Each call returns a list the caller owns.
pub trait WarningRule: Send + Sync + fmt::Debug {
    /// Stable identifier used in logs and rule listings.
    fn name(&self) -> &str;

    /// Produce this rule's warnings for `payload`, in deterministic order.
    fn warnings(&self, payload: &Value) -> Vec<WarningRecord>;
}

impl WarningRule for RuleDescriptor {
    fn name(&self) -> &str {
        RuleDescriptor::name(self)
    }

    fn warnings(&self, payload: &Value) -> Vec<WarningRecord> {
        evaluate(Some(payload), self)
    }
}
