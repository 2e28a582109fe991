//! # wmr-schema: Hard Receipt Validation
//!
//! Rejects receipt payloads that are structurally or legally invalid,
//! before any warning is generated.
//!
//! ## Runtime Validation (`validate`)
//!
//! [`ReceiptValidator`] compiles the embedded `receipt.schema.json` once
//! and reports every violation with a dotted key. The schema carries the
//! primitive types, enumerations and format patterns (postcodes, vehicle
//! registrations, carrier registration numbers, EWC codes).
//!
//! ## Cross-Field Constraints (`constraints`)
//!
//! Contradictions between fields, such as a carrier supplying both a
//! registration number and a reason for not having one.
//!
//! ## Crate Policy
//!
//! - Depends only on `wmr-core` internally.
//! - Fields whose absence is a warning must stay optional and nullable in
//!   the schema, or the warning can never fire.

pub mod constraints;
pub mod validate;

pub use validate::{
    pointer_to_key, ReceiptValidator, SchemaValidationError, Violation, Violations,
    RECEIPT_SCHEMA,
};
