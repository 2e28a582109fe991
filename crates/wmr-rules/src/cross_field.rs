//! # Cross-Field Conditional Rules
//!
//! Rules that read two or more sibling fields jointly, or reduce over the
//! whole `wasteItems` array, and so cannot be written as a single
//! per-element predicate. They render through [`FieldPath`] exactly like
//! descriptor rules.

use serde_json::Value;
use wmr_core::value::{
    array_at, bool_at, is_blank, is_blank_at, is_non_negative_number_at, lookup, str_at,
};
use wmr_core::{
    is_hazardous_ewc_code, ComponentKind, ErrorType, RuleDefinitionError, SourceOfComponents,
    WarningRecord,
};

use crate::descriptor::{BasePath, Cardinality};
use crate::messages;
use crate::path::FieldPath;
use crate::rule::WarningRule;

/// Top-level key holding the waste items.
pub const WASTE_ITEMS: &str = "wasteItems";

fn waste_items(payload: &Value) -> &[Value] {
    array_at(payload, WASTE_ITEMS).map(Vec::as_slice).unwrap_or_default()
}

fn record(path: FieldPath<'_>, error_type: ErrorType, template: &str) -> WarningRecord {
    WarningRecord::from_template(path.key(), error_type, template, &path.label())
}

// ---------------------------------------------------------------------------
// Hazardous consignment code
// ---------------------------------------------------------------------------

/// Requires a consignment code, or a reason for its absence, when any waste
/// item carries a hazardous EWC code.
///
/// A reduction over all items: at most one warning per payload, addressed
/// at the root-level `hazardousWasteConsignmentCode`.
#[derive(Debug, Clone)]
pub struct HazardousConsignmentRule {
    base: BasePath,
}

impl HazardousConsignmentRule {
    /// Root field holding the consignment code.
    pub const CODE_FIELD: &'static str = "hazardousWasteConsignmentCode";
    /// Root field holding the reason for a missing consignment code.
    pub const REASON_FIELD: &'static str = "reasonForNoConsignmentCode";

    /// Create the rule.
    pub fn new() -> Result<Self, RuleDefinitionError> {
        Ok(Self {
            base: BasePath::parse(Self::CODE_FIELD)?,
        })
    }

    fn any_hazardous_item(payload: &Value) -> bool {
        waste_items(payload).iter().any(|item| {
            array_at(item, "ewcCodes").is_some_and(|codes| {
                codes
                    .iter()
                    .filter_map(Value::as_str)
                    .any(is_hazardous_ewc_code)
            })
        })
    }
}

impl WarningRule for HazardousConsignmentRule {
    fn name(&self) -> &str {
        "hazardous-consignment-code"
    }

    fn warnings(&self, payload: &Value) -> Vec<WarningRecord> {
        if !Self::any_hazardous_item(payload) {
            return Vec::new();
        }
        if !is_blank_at(payload, Self::CODE_FIELD) || !is_blank_at(payload, Self::REASON_FIELD) {
            return Vec::new();
        }
        vec![record(
            FieldPath::new(&self.base, Cardinality::One),
            ErrorType::NotProvided,
            messages::CONSIGNMENT_CODE_REQUIRED,
        )]
    }
}

// ---------------------------------------------------------------------------
// Source-of-components completeness
// ---------------------------------------------------------------------------

/// Checks that component data accompanies a "provided" component source.
///
/// Per waste item, for one [`ComponentKind`]:
///
/// 1. Skip when the declaration object is absent or its flag is `false`.
/// 2. Skip unless `sourceOfComponents` parses to a provided source.
/// 3. `components` absent or empty: one `NotProvided` warning. For
///    [`ComponentKind::Pops`] with `containsPops: true` this case belongs to
///    [`PopComponentsRecommendedRule`] and is skipped here.
/// 4. Any component without a non-blank `name` and a number
///    `concentration >= 0`: one `TBC` warning.
///
/// At most one warning per item, naming `wasteItems.<i>.<object>.components`.
#[derive(Debug, Clone)]
pub struct ComponentCompletenessRule {
    kind: ComponentKind,
    name: String,
    base: BasePath,
}

impl ComponentCompletenessRule {
    /// Create the rule for one component kind.
    pub fn new(kind: ComponentKind) -> Result<Self, RuleDefinitionError> {
        Ok(Self {
            kind,
            name: format!("{}-components-completeness", kind.object_field()),
            base: component_base(kind)?,
        })
    }

    /// The component kind this rule checks.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn check_item(&self, item: &Value) -> Option<ErrorType> {
        let declaration = item.get(self.kind.object_field()).filter(|d| d.is_object())?;
        let flag = bool_at(declaration, self.kind.flag_field());
        if flag == Some(false) {
            return None;
        }
        let source: SourceOfComponents = str_at(declaration, "sourceOfComponents")?.parse().ok()?;
        if !source.is_provided() {
            return None;
        }
        match array_at(declaration, "components") {
            Some(components) if !components.is_empty() => components
                .iter()
                .any(|c| !component_is_complete(c))
                .then_some(ErrorType::Tbc),
            _ if self.kind == ComponentKind::Pops && flag == Some(true) => None,
            _ => Some(ErrorType::NotProvided),
        }
    }
}

impl WarningRule for ComponentCompletenessRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn warnings(&self, payload: &Value) -> Vec<WarningRecord> {
        waste_items(payload)
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let error_type = self.check_item(item)?;
                let template = match error_type {
                    ErrorType::NotProvided => messages::COMPONENTS_REQUIRED,
                    ErrorType::Tbc => messages::COMPONENTS_INCOMPLETE,
                };
                Some(record(components_path(&self.base, i), error_type, template))
            })
            .collect()
    }
}

fn component_is_complete(component: &Value) -> bool {
    !is_blank(lookup(component, "name"))
        && is_non_negative_number_at(component, "concentration")
}

// ---------------------------------------------------------------------------
// POP components recommended
// ---------------------------------------------------------------------------

/// Recommends listing POP components when an item contains POPs and names
/// a component source.
///
/// Fires when `pops.containsPops` is `true`, `pops.sourceOfComponents` is
/// present and not `NOT_PROVIDED`, and `pops.components` is absent or empty.
#[derive(Debug, Clone)]
pub struct PopComponentsRecommendedRule {
    base: BasePath,
}

impl PopComponentsRecommendedRule {
    /// Create the rule.
    pub fn new() -> Result<Self, RuleDefinitionError> {
        Ok(Self {
            base: component_base(ComponentKind::Pops)?,
        })
    }

    fn check_item(item: &Value) -> bool {
        let kind = ComponentKind::Pops;
        let Some(pops) = item.get(kind.object_field()) else {
            return false;
        };
        if bool_at(pops, kind.flag_field()) != Some(true) {
            return false;
        }
        let source = lookup(pops, "sourceOfComponents");
        if is_blank(source)
            || source.and_then(Value::as_str) == Some(SourceOfComponents::NotProvided.as_str())
        {
            return false;
        }
        array_at(pops, "components").map_or(true, Vec::is_empty)
    }
}

impl WarningRule for PopComponentsRecommendedRule {
    fn name(&self) -> &str {
        "pop-components-recommended"
    }

    fn warnings(&self, payload: &Value) -> Vec<WarningRecord> {
        waste_items(payload)
            .iter()
            .enumerate()
            .filter(|(_, item)| Self::check_item(item))
            .map(|(i, _)| {
                record(
                    components_path(&self.base, i),
                    ErrorType::NotProvided,
                    messages::POP_COMPONENTS_RECOMMENDED,
                )
            })
            .collect()
    }
}

fn component_base(kind: ComponentKind) -> Result<BasePath, RuleDefinitionError> {
    BasePath::parse(&format!("{WASTE_ITEMS}.{}", kind.object_field()))
}

fn components_path(base: &BasePath, index: usize) -> FieldPath<'_> {
    FieldPath::new(base, Cardinality::Many)
        .at(Some(index))
        .field(Some("components"))
}
