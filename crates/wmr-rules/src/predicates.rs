//! # Value Predicates
//!
//! Pure functions from a payload element to a [`RuleResult`]. A predicate
//! knows nothing about paths: it only reports whether the element passes
//! and, for checks over a nested array, which entries failed.
//!
//! Every predicate here is total. A missing or wrongly-typed field is a
//! failing result, never a panic.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use wmr_core::value::{array_at, is_blank, lookup};

/// Outcome of applying a predicate to one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleResult {
    /// Whether the element passed.
    pub is_valid: bool,
    /// Failing entries of a further nested array, when the check is per-entry.
    pub invalid_indices: Option<Vec<usize>>,
}

impl RuleResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            invalid_indices: None,
        }
    }

    /// A failing result addressed at the element itself.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            invalid_indices: None,
        }
    }

    /// Pass when `ok`, otherwise fail at the element.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Self::valid()
        } else {
            Self::invalid()
        }
    }

    /// Pass when `indices` is empty, otherwise fail at each listed entry.
    pub fn from_indices(indices: Vec<usize>) -> Self {
        if indices.is_empty() {
            Self::valid()
        } else {
            Self {
                is_valid: false,
                invalid_indices: Some(indices),
            }
        }
    }
}

/// Signature shared by all predicates.
pub type PredicateFn = dyn Fn(&Value) -> RuleResult + Send + Sync;

/// A shareable, thread-safe predicate.
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    /// Wrap a closure or function.
    pub fn new(f: impl Fn(&Value) -> RuleResult + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the predicate to an element.
    pub fn test(&self, element: &Value) -> RuleResult {
        (self.0)(element)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Passes when the field at `path` is an array with at least one entry.
pub fn non_empty_array(element: &Value, path: &str) -> RuleResult {
    RuleResult::from_bool(array_at(element, path).is_some_and(|items| !items.is_empty()))
}

/// Passes when the field at `path` is not blank.
pub fn present(element: &Value, path: &str) -> RuleResult {
    RuleResult::from_bool(!is_blank(lookup(element, path)))
}

/// Indices of the entries of the array at `array_path` failing `check`.
///
/// An absent or non-array field yields no indices: whether the array itself
/// is required is a separate rule.
pub fn failing_entries(
    element: &Value,
    array_path: &str,
    check: impl Fn(&Value) -> bool,
) -> RuleResult {
    let indices = array_at(element, array_path)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter(|(_, entry)| !check(*entry))
                .map(|(i, _)| i)
                .collect()
        })
        .unwrap_or_default();
    RuleResult::from_indices(indices)
}

/// Entries of `array_path` whose `field` is blank.
pub fn entries_missing(element: &Value, array_path: &str, field: &str) -> RuleResult {
    failing_entries(element, array_path, |entry| !is_blank(lookup(entry, field)))
}

/// Entries of `array_path` that carry `parent` but whose `parent.child` is blank.
///
/// Entries without `parent` are skipped so a missing parent is reported
/// once, by the rule that requires the parent.
pub fn entries_missing_within(
    element: &Value,
    array_path: &str,
    parent: &str,
    child: &str,
) -> RuleResult {
    failing_entries(element, array_path, |entry| {
        let Some(parent_value) = lookup(entry, parent).filter(|v| !is_blank(Some(*v))) else {
            return true;
        };
        !is_blank(lookup(parent_value, child))
    })
}
