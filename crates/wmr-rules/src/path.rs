//! # Path Resolution
//!
//! Renders one logical payload location in two forms:
//!
//! | Form | Example |
//! |------|---------|
//! | machine key | `wasteItems.0.disposalOrRecoveryCodes.1.code` |
//! | human label | `wasteItems[0].disposalOrRecoveryCodes[1].code` |
//!
//! Index placement:
//!
//! - The top-level index follows the first segment, and only for
//!   [`Cardinality::Many`] descriptors. `One` roots are never indexed.
//! - The nested index follows the last base segment. When that segment is
//!   the iterated root itself (a single-segment `Many` path), the nested
//!   array is the rule's field and the index follows the field instead.
//! - The field, when present, is appended last as plain dotted segments.
//!
//! The key always resolves through [`wmr_core::value::lookup`] to the
//! failing node or the position where it is missing.

use crate::descriptor::{BasePath, Cardinality};

/// Builder for a rendered location.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath<'a> {
    base: &'a BasePath,
    cardinality: Cardinality,
    index: Option<usize>,
    nested: Option<usize>,
    field: Option<&'a str>,
}

impl<'a> FieldPath<'a> {
    /// Start from a descriptor's base path.
    pub fn new(base: &'a BasePath, cardinality: Cardinality) -> Self {
        Self {
            base,
            cardinality,
            index: None,
            nested: None,
            field: None,
        }
    }

    /// Set the top-level element index.
    pub fn at(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    /// Set the index into the nested array.
    pub fn nested(mut self, index: Option<usize>) -> Self {
        self.nested = index;
        self
    }

    /// Set the trailing sub-field.
    pub fn field(mut self, field: Option<&'a str>) -> Self {
        self.field = field;
        self
    }

    /// Dotted machine key.
    pub fn key(&self) -> String {
        self.render(|out, index| {
            out.push('.');
            out.push_str(&index.to_string());
        })
    }

    /// Bracketed human label.
    pub fn label(&self) -> String {
        self.render(|out, index| {
            out.push('[');
            out.push_str(&index.to_string());
            out.push(']');
        })
    }

    fn render(&self, push_index: impl Fn(&mut String, usize)) -> String {
        let segments = self.base.segments();
        let last = segments.len().saturating_sub(1);
        let root_iterated = self.cardinality == Cardinality::Many;
        let nested_on_field = root_iterated && last == 0 && self.field.is_some();

        let mut out = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(segment);
            if i == 0 && root_iterated {
                if let Some(index) = self.index {
                    push_index(&mut out, index);
                }
            }
            if i == last && !nested_on_field {
                if let Some(nested) = self.nested {
                    push_index(&mut out, nested);
                }
            }
        }

        if let Some(field) = self.field {
            out.push('.');
            out.push_str(field);
            if nested_on_field {
                if let Some(nested) = self.nested {
                    push_index(&mut out, nested);
                }
            }
        }
        out
    }
}
