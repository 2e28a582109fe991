//! # Rules Subcommand
//!
//! Lists the registered warning rules in evaluation order, one per line.

use anyhow::{anyhow, Result};

use wmr_rules::standard_engine;

/// Names of the standard rules, in evaluation order.
pub fn rule_names() -> Result<Vec<String>> {
    let engine = standard_engine().map_err(|e| anyhow!("standard rules failed to build: {e}"))?;
    Ok(engine.rule_names().into_iter().map(str::to_string).collect())
}

/// Execute the rules subcommand.
pub fn run_rules() -> Result<u8> {
    for name in rule_names()? {
        println!("{name}");
    }
    Ok(0)
}
