//! # Rule Evaluator
//!
//! Applies one [`RuleDescriptor`] to a payload.
//!
//! ## Evaluation Logic
//!
//! 1. A missing or `null` payload yields no warnings.
//! 2. For [`Cardinality::Many`], the payload key named by the base path's
//!    root is iterated with indices when it is an array. When it is absent
//!    or not an array, the payload itself is evaluated once, unindexed.
//!    [`Cardinality::One`] always evaluates the payload once, unindexed.
//! 3. Each element is tested against every rule in declaration order.
//! 4. A failure with nested indices yields one warning per index, ascending.
//!    A failure without them yields exactly one warning for the element.
//!
//! Output order: element index, then rule declaration order, then nested
//! index. Evaluation is a pure function of its inputs.

use serde_json::Value;
use wmr_core::WarningRecord;

use crate::descriptor::{Cardinality, FieldRule, RuleDescriptor};
use crate::path::FieldPath;

/// Evaluate `descriptor` against `payload`.
pub fn evaluate(payload: Option<&Value>, descriptor: &RuleDescriptor) -> Vec<WarningRecord> {
    let payload = match payload {
        None | Some(Value::Null) => return Vec::new(),
        Some(payload) => payload,
    };

    let mut warnings = Vec::new();
    for (index, element) in elements(payload, descriptor) {
        for rule in descriptor.rules() {
            warnings.extend(apply_rule(descriptor, rule, index, element));
        }
    }
    warnings
}

/// The `(index, element)` pairs a descriptor is applied to.
fn elements<'a>(
    payload: &'a Value,
    descriptor: &RuleDescriptor,
) -> Vec<(Option<usize>, &'a Value)> {
    match descriptor.cardinality() {
        Cardinality::Many => match payload.get(descriptor.base_path().root()) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| (Some(i), item))
                .collect(),
            _ => vec![(None, payload)],
        },
        Cardinality::One => vec![(None, payload)],
    }
}

fn apply_rule(
    descriptor: &RuleDescriptor,
    rule: &FieldRule,
    index: Option<usize>,
    element: &Value,
) -> Vec<WarningRecord> {
    let result = rule.predicate().test(element);
    if result.is_valid {
        return Vec::new();
    }

    let path = FieldPath::new(descriptor.base_path(), descriptor.cardinality())
        .at(index)
        .field(rule.field());

    match result.invalid_indices {
        Some(mut nested) if !nested.is_empty() => {
            nested.sort_unstable();
            nested.dedup();
            nested
                .into_iter()
                .map(|n| record(rule, path.nested(Some(n))))
                .collect()
        }
        _ => vec![record(rule, path)],
    }
}

fn record(rule: &FieldRule, path: FieldPath<'_>) -> WarningRecord {
    WarningRecord::from_template(path.key(), rule.error_type(), rule.message(), &path.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{entries_missing, non_empty_array, RuleResult};
    use serde_json::json;
    use wmr_core::ErrorType;

    fn codes_descriptor() -> RuleDescriptor {
        RuleDescriptor::new(
            "codes",
            "wasteItems.disposalOrRecoveryCodes",
            Cardinality::Many,
            vec![
                FieldRule::whole(ErrorType::NotProvided, "{{ #label }} is required", |item| {
                    non_empty_array(item, "disposalOrRecoveryCodes")
                }),
                FieldRule::on("code", ErrorType::NotProvided, "{{ #label }} is required", |item| {
                    entries_missing(item, "disposalOrRecoveryCodes", "code")
                }),
            ],
        )
        .unwrap()
    }

    #[test]
    fn null_and_missing_payloads_yield_nothing() {
        let d = codes_descriptor();
        assert!(evaluate(None, &d).is_empty());
        assert!(evaluate(Some(&Value::Null), &d).is_empty());
    }

    #[test]
    fn iterates_elements_with_indices() {
        let payload = json!({"wasteItems": [
            {"disposalOrRecoveryCodes": [{"code": "R1"}]},
            {"disposalOrRecoveryCodes": []},
            {"disposalOrRecoveryCodes": [{"code": "R1"}, {}]}
        ]});
        let keys: Vec<String> = evaluate(Some(&payload), &codes_descriptor())
            .into_iter()
            .map(|w| w.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "wasteItems.1.disposalOrRecoveryCodes",
                "wasteItems.2.disposalOrRecoveryCodes.1.code",
            ]
        );
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let payload = json!({"wasteItems": []});
        assert!(evaluate(Some(&payload), &codes_descriptor()).is_empty());
    }

    #[test]
    fn absent_collection_evaluates_payload_unindexed() {
        let payload = json!({"carrier": {}});
        let warnings = evaluate(Some(&payload), &codes_descriptor());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "wasteItems.disposalOrRecoveryCodes");
        assert_eq!(warnings[0].message, "wasteItems.disposalOrRecoveryCodes is required");
    }

    #[test]
    fn nested_indices_are_sorted_and_deduplicated() {
        let d = RuleDescriptor::new(
            "unordered",
            "wasteItems.disposalOrRecoveryCodes",
            Cardinality::Many,
            vec![FieldRule::on("code", ErrorType::Tbc, "{{ #label }}", |_| {
                RuleResult::from_indices(vec![2, 0, 2])
            })],
        )
        .unwrap();
        let payload = json!({"wasteItems": [{}]});
        let keys: Vec<String> = evaluate(Some(&payload), &d).into_iter().map(|w| w.key).collect();
        assert_eq!(
            keys,
            vec![
                "wasteItems.0.disposalOrRecoveryCodes.0.code",
                "wasteItems.0.disposalOrRecoveryCodes.2.code",
            ]
        );
    }

    #[test]
    fn invalid_with_empty_indices_reports_element() {
        let d = RuleDescriptor::new(
            "odd",
            "carrier",
            Cardinality::One,
            vec![FieldRule::on("name", ErrorType::NotProvided, "{{ #label }} missing", |_| {
                RuleResult {
                    is_valid: false,
                    invalid_indices: Some(vec![]),
                }
            })],
        )
        .unwrap();
        let warnings = evaluate(Some(&json!({})), &d);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "carrier.name");
        assert_eq!(warnings[0].message, "carrier.name missing");
    }

    #[test]
    fn valid_result_with_indices_is_ignored() {
        let d = RuleDescriptor::new(
            "noisy",
            "carrier",
            Cardinality::One,
            vec![FieldRule::whole(ErrorType::NotProvided, "{{ #label }}", |_| RuleResult {
                is_valid: true,
                invalid_indices: Some(vec![1]),
            })],
        )
        .unwrap();
        assert!(evaluate(Some(&json!({})), &d).is_empty());
    }

    #[test]
    fn one_cardinality_receives_whole_payload() {
        let d = RuleDescriptor::new(
            "carrier-name",
            "carrier",
            Cardinality::One,
            vec![FieldRule::on("name", ErrorType::NotProvided, "{{ #label }} is required", |p| {
                crate::predicates::present(p, "carrier.name")
            })],
        )
        .unwrap();
        assert!(evaluate(Some(&json!({"carrier": {"name": "Acme"}})), &d).is_empty());
        let warnings = evaluate(Some(&json!({"carrier": {}})), &d);
        assert_eq!(warnings[0].key, "carrier.name");
    }

    #[test]
    fn non_object_payloads_evaluate_once_unindexed() {
        let d = codes_descriptor();
        for payload in [json!(1), json!("x"), json!([1, 2]), json!(true)] {
            let warnings = evaluate(Some(&payload), &d);
            assert_eq!(warnings.len(), 1, "payload {payload}");
            assert_eq!(warnings[0].key, "wasteItems.disposalOrRecoveryCodes");
            assert_eq!(warnings[0].error_type, ErrorType::NotProvided);
            assert_eq!(warnings[0].message, "wasteItems.disposalOrRecoveryCodes is required");
        }
    }
}
