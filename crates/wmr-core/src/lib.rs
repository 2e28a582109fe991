//! # wmr-core: Foundational Types for Receipt Validation
//!
//! This crate is the leaf of the workspace DAG. It defines the types that
//! every other crate shares when talking about a waste movement receipt
//! and the warnings raised against it. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed error classification.** [`ErrorType`] has exactly two
//!    variants, serialized as the literal strings `"NotProvided"` and
//!    `"TBC"`. Clients key behaviour off these strings; new warning causes
//!    must map onto the existing set.
//!
//! 2. **Tagged component kinds.** Hazardous and POP component data share
//!    one shape. [`ComponentKind`] names the object field and flag field of
//!    each variant once, so no rule ever builds a field name by string
//!    concatenation.
//!
//! 3. **One definition of "blank".** [`value::is_blank`] treats `null`,
//!    `""` and an absent field as blank. Whitespace is not blank.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wmr-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod domain;
pub mod error;
pub mod ewc;
pub mod identity;
pub mod value;
pub mod warning;

// Re-export primary types for ergonomic imports.
pub use domain::{ComponentKind, SourceOfComponents};
pub use error::{RuleDefinitionError, WmrError};
pub use ewc::{is_hazardous_ewc_code, HAZARDOUS_EWC_CODES};
pub use identity::TrackingId;
pub use warning::{ErrorType, WarningRecord, LABEL_PLACEHOLDER};
