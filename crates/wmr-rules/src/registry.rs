//! # Standard Rule Descriptors
//!
//! The domain rules expressible as "one predicate over one element",
//! declared as [`RuleDescriptor`]s. Rule order inside each descriptor is the
//! order warnings appear in for a given element.

use wmr_core::value::is_blank_at;
use wmr_core::{ErrorType, RuleDefinitionError};

use crate::descriptor::{Cardinality, FieldRule, RuleDescriptor};
use crate::messages;
use crate::predicates::{entries_missing, entries_missing_within, non_empty_array, RuleResult};

/// Field holding each waste item's disposal/recovery entries.
pub const DISPOSAL_OR_RECOVERY_CODES: &str = "disposalOrRecoveryCodes";

/// Disposal/recovery code and weight completeness, per waste item.
///
/// | # | Field | Fails when |
/// |---|-------|------------|
/// | 1 | (codes array) | absent or empty |
/// | 2 | `code` | an entry has no code |
/// | 3 | `weight` | an entry has no weight |
/// | 4 | `weight.metric` | an entry's weight has no metric |
/// | 5 | `weight.amount` | an entry's weight has no amount |
/// | 6 | `weight.isEstimate` | an entry's weight has no estimate flag |
///
/// Rules 4 to 6 only inspect entries that carry a weight, so an entry missing
/// its weight is reported once, by rule 3.
pub fn disposal_or_recovery_codes() -> Result<RuleDescriptor, RuleDefinitionError> {
    RuleDescriptor::new(
        "disposal-or-recovery-codes",
        "wasteItems.disposalOrRecoveryCodes",
        Cardinality::Many,
        vec![
            FieldRule::whole(
                ErrorType::NotProvided,
                messages::DISPOSAL_OR_RECOVERY_CODES_REQUIRED,
                |item| non_empty_array(item, DISPOSAL_OR_RECOVERY_CODES),
            ),
            FieldRule::on(
                "code",
                ErrorType::NotProvided,
                messages::DISPOSAL_OR_RECOVERY_CODE_REQUIRED,
                |item| entries_missing(item, DISPOSAL_OR_RECOVERY_CODES, "code"),
            ),
            FieldRule::on(
                "weight",
                ErrorType::NotProvided,
                messages::DISPOSAL_OR_RECOVERY_WEIGHT_REQUIRED,
                |item| entries_missing(item, DISPOSAL_OR_RECOVERY_CODES, "weight"),
            ),
            FieldRule::on(
                "weight.metric",
                ErrorType::NotProvided,
                messages::WEIGHT_METRIC_REQUIRED,
                |item| entries_missing_within(item, DISPOSAL_OR_RECOVERY_CODES, "weight", "metric"),
            ),
            FieldRule::on(
                "weight.amount",
                ErrorType::NotProvided,
                messages::WEIGHT_AMOUNT_REQUIRED,
                |item| entries_missing_within(item, DISPOSAL_OR_RECOVERY_CODES, "weight", "amount"),
            ),
            FieldRule::on(
                "weight.isEstimate",
                ErrorType::NotProvided,
                messages::WEIGHT_IS_ESTIMATE_REQUIRED,
                |item| {
                    entries_missing_within(item, DISPOSAL_OR_RECOVERY_CODES, "weight", "isEstimate")
                },
            ),
        ],
    )
}

/// Carrier registration number or a reason for its absence.
///
/// Evaluated once against the whole payload since `carrier` is a singleton.
/// Supplying both is rejected by hard validation, not here.
pub fn carrier_registration() -> Result<RuleDescriptor, RuleDefinitionError> {
    RuleDescriptor::new(
        "carrier-registration-reason",
        "carrier",
        Cardinality::One,
        vec![FieldRule::on(
            "reasonForNoRegistrationNumber",
            ErrorType::NotProvided,
            messages::REASON_FOR_NO_REGISTRATION_NUMBER_REQUIRED,
            |payload| {
                RuleResult::from_bool(
                    !is_blank_at(payload, "carrier.registrationNumber")
                        || !is_blank_at(payload, "carrier.reasonForNoRegistrationNumber"),
                )
            },
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use serde_json::json;

    #[test]
    fn standard_descriptors_build() {
        assert!(disposal_or_recovery_codes().is_ok());
        assert!(carrier_registration().is_ok());
    }

    #[test]
    fn disposal_rule_order_is_declared_order() {
        let d = disposal_or_recovery_codes().unwrap();
        let fields: Vec<Option<&str>> = d.rules().iter().map(|r| r.field()).collect();
        assert_eq!(
            fields,
            vec![
                None,
                Some("code"),
                Some("weight"),
                Some("weight.metric"),
                Some("weight.amount"),
                Some("weight.isEstimate"),
            ]
        );
    }

    #[test]
    fn registration_number_alone_passes() {
        let d = carrier_registration().unwrap();
        let payload = json!({"carrier": {"registrationNumber": "CBDU123456"}});
        assert!(evaluate(Some(&payload), &d).is_empty());
    }

    #[test]
    fn reason_alone_passes() {
        let d = carrier_registration().unwrap();
        let payload = json!({"carrier": {"reasonForNoRegistrationNumber": "Exempt"}});
        assert!(evaluate(Some(&payload), &d).is_empty());
    }

    #[test]
    fn both_blank_warns_once() {
        let d = carrier_registration().unwrap();
        for carrier in [
            json!({}),
            json!({"registrationNumber": null, "reasonForNoRegistrationNumber": ""}),
            json!({"registrationNumber": ""}),
        ] {
            let warnings = evaluate(Some(&json!({"carrier": carrier})), &d);
            assert_eq!(warnings.len(), 1, "carrier {carrier}");
            assert_eq!(warnings[0].key, "carrier.reasonForNoRegistrationNumber");
            assert_eq!(warnings[0].error_type, ErrorType::NotProvided);
            assert_eq!(
                warnings[0].message,
                "carrier.reasonForNoRegistrationNumber is required when carrier.registrationNumber is not provided"
            );
        }
    }

    #[test]
    fn whitespace_counts_as_provided() {
        let d = carrier_registration().unwrap();
        let payload = json!({"carrier": {"registrationNumber": "   "}});
        assert!(evaluate(Some(&payload), &d).is_empty());
    }

    #[test]
    fn missing_carrier_warns() {
        let d = carrier_registration().unwrap();
        assert_eq!(evaluate(Some(&json!({})), &d).len(), 1);
    }
}
