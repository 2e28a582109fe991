//! # Warning Aggregation
//!
//! Runs every registered [`WarningRule`] against a payload and concatenates
//! their output in registration order. The standard engine registers:
//!
//! | # | Rule |
//! |---|------|
//! | 1 | disposal/recovery code and weight completeness |
//! | 2 | hazardous source-of-components completeness |
//! | 3 | POP source-of-components completeness |
//! | 4 | POP components recommended |
//! | 5 | hazardous consignment code |
//! | 6 | carrier registration reason |
//!
//! Rules are independent: none reads another's output, and the engine holds
//! no per-call state, so one engine may serve concurrent callers.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;
use wmr_core::{ComponentKind, RuleDefinitionError, WarningRecord};

use crate::cross_field::{
    ComponentCompletenessRule, HazardousConsignmentRule, PopComponentsRecommendedRule,
};
use crate::registry;
use crate::rule::WarningRule;

/// An ordered set of warning rules.
#[derive(Default)]
pub struct WarningEngine {
    rules: Vec<Box<dyn WarningRule>>,
}

impl WarningEngine {
    /// An engine with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine with every standard receipt rule, in standard order.
    pub fn standard() -> Result<Self, RuleDefinitionError> {
        Ok(Self::new()
            .with_rule(registry::disposal_or_recovery_codes()?)
            .with_rule(ComponentCompletenessRule::new(ComponentKind::Hazardous)?)
            .with_rule(ComponentCompletenessRule::new(ComponentKind::Pops)?)
            .with_rule(PopComponentsRecommendedRule::new()?)
            .with_rule(HazardousConsignmentRule::new()?)
            .with_rule(registry::carrier_registration()?))
    }

    /// Append a rule. Its warnings follow those of every earlier rule.
    pub fn register(&mut self, rule: impl WarningRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_rule(mut self, rule: impl WarningRule + 'static) -> Self {
        self.register(rule);
        self
    }

    /// Rule names in registration order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every warning for `payload`, in registration order.
    ///
    /// A missing or `null` payload yields an empty list. `tracking_id` only
    /// annotates log output.
    pub fn generate(
        &self,
        payload: Option<&Value>,
        tracking_id: Option<&str>,
    ) -> Vec<WarningRecord> {
        let payload = match payload {
            None | Some(Value::Null) => return Vec::new(),
            Some(payload) => payload,
        };
        let tracking_id = tracking_id.unwrap_or("-");

        let mut warnings = Vec::new();
        for rule in &self.rules {
            let produced = rule.warnings(payload);
            tracing::debug!(
                tracking_id,
                rule = rule.name(),
                count = produced.len(),
                "rule evaluated"
            );
            warnings.extend(produced);
        }

        for warning in &warnings {
            tracing::info!(
                tracking_id,
                key = %warning.key,
                error_type = %warning.error_type,
                warning = %warning.message,
                "receipt warning"
            );
        }
        warnings
    }
}

impl fmt::Debug for WarningEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarningEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

static STANDARD_ENGINE: OnceLock<Result<WarningEngine, RuleDefinitionError>> = OnceLock::new();

/// The process-wide standard engine, built on first use.
pub fn standard_engine() -> Result<&'static WarningEngine, &'static RuleDefinitionError> {
    STANDARD_ENGINE.get_or_init(WarningEngine::standard).as_ref()
}

/// Generate every standard warning for a receipt payload.
///
/// Returns an empty list for a missing or `null` payload. If the standard
/// rule set cannot be built the failure is logged and no warnings are
/// returned.
pub fn generate_all_warnings(
    payload: Option<&Value>,
    tracking_id: Option<&str>,
) -> Vec<WarningRecord> {
    match standard_engine() {
        Ok(engine) => engine.generate(payload, tracking_id),
        Err(e) => {
            tracing::error!(error = %e, "standard warning rules failed to build");
            Vec::new()
        }
    }
}
