//! # wmr-cli: Receipt Validation Command-Line Interface
//!
//! The `wmr` tool runs a receipt payload through the same pipeline a
//! submission endpoint would: hard validation, then warning generation.
//!
//! ## Subcommands
//!
//! - `validate`: Check one payload file and print the validation report
//! - `rules`: List the registered warning rules in evaluation order
//!
//! ```bash
//! wmr validate receipt.json --pretty
//! wmr -v --config wmr.yaml validate receipt.json --tracking-id abc-123
//! wmr rules
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `wmr-schema` and `wmr-rules`.
//! - Reports go to stdout; logs go to stderr.

pub mod config;
pub mod rules;
pub mod validate;
