//! # wmr-rules: Receipt Warning Engine
//!
//! Produces the non-blocking warnings attached to a waste movement receipt
//! that has already passed hard validation. A warning names the payload
//! location it concerns twice: a dotted machine key and a bracketed human
//! label embedded in its message.
//!
//! ## Architecture
//!
//! - **Descriptors** ([`descriptor`]): declarative "base path, cardinality,
//!   ordered field rules" units. Most domain rules are written this way
//!   ([`registry`]).
//! - **Evaluator** ([`evaluator`]): applies one descriptor to a payload and
//!   renders failures through [`path::FieldPath`].
//! - **Cross-field rules** ([`cross_field`]): rules that read sibling
//!   fields jointly or reduce over all items.
//! - **Aggregator** ([`aggregator`]): runs every [`WarningRule`] in
//!   registration order and concatenates the output.
//!
//! ## Usage
//!
//! ```
//! use serde_json::json;
//! use wmr_rules::generate_all_warnings;
//!
//! let receipt = json!({
//!     "wasteItems": [{"disposalOrRecoveryCodes": [{"code": "R1"}]}],
//!     "carrier": {"registrationNumber": "CBDU123456"}
//! });
//! let warnings = generate_all_warnings(Some(&receipt), None);
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].key, "wasteItems.0.disposalOrRecoveryCodes.0.weight");
//! ```
//!
//! ## Crate Policy
//!
//! - Rules are total: malformed payloads produce fewer warnings, never a
//!   panic.
//! - Evaluation holds no state between calls.

pub mod aggregator;
pub mod cross_field;
pub mod descriptor;
pub mod evaluator;
pub mod messages;
pub mod path;
pub mod predicates;
pub mod registry;
pub mod rule;

pub use aggregator::{generate_all_warnings, standard_engine, WarningEngine};
pub use cross_field::{
    ComponentCompletenessRule, HazardousConsignmentRule, PopComponentsRecommendedRule,
};
pub use descriptor::{BasePath, Cardinality, FieldRule, RuleDescriptor};
pub use evaluator::evaluate;
pub use path::FieldPath;
pub use predicates::{Predicate, RuleResult};
pub use rule::WarningRule;
