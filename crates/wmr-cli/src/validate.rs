//! # Validate Subcommand
//!
//! Runs one receipt payload through hard validation and warning generation
//! and prints the result as JSON on stdout.
//!
//! | Outcome | stdout | Exit code |
//! |---------|--------|-----------|
//! | accepted | `{"wasteTrackingId": ..., "validation": {"warnings": [...]}}` | 0 |
//! | rejected | `{"validation": {"errors": [...]}}` | 2 |
//! | unreadable input | (nothing, error logged) | 1 |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use wmr_core::{TrackingId, WarningRecord};
use wmr_rules::generate_all_warnings;
use wmr_schema::{ReceiptValidator, SchemaValidationError, Violation};

use crate::config::CliConfig;

/// Exit code for a payload rejected by hard validation.
pub const EXIT_REJECTED: u8 = 2;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the receipt payload (JSON).
    pub payload: PathBuf,

    /// Tracking id to report and log. Falls back to the payload's
    /// `wasteTrackingId`, then to a fresh UUID.
    #[arg(long)]
    pub tracking_id: Option<String>,

    /// Skip hard schema validation and go straight to warnings.
    #[arg(long)]
    pub skip_schema: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Output for an accepted payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedReport {
    pub waste_tracking_id: TrackingId,
    pub validation: WarningSection,
}

#[derive(Debug, Serialize)]
pub struct WarningSection {
    pub warnings: Vec<WarningRecord>,
}

/// Output for a rejected payload.
#[derive(Debug, Serialize)]
pub struct RejectedReport {
    pub validation: ErrorSection,
}

#[derive(Debug, Serialize)]
pub struct ErrorSection {
    pub errors: Vec<Violation>,
}

/// Result of checking one payload.
#[derive(Debug)]
pub enum Outcome {
    Accepted(AcceptedReport),
    Rejected(RejectedReport),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Accepted(_) => 0,
            Self::Rejected(_) => EXIT_REJECTED,
        }
    }

    /// Render as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = match (self, pretty) {
            (Self::Accepted(r), false) => serde_json::to_string(r)?,
            (Self::Accepted(r), true) => serde_json::to_string_pretty(r)?,
            (Self::Rejected(r), false) => serde_json::to_string(r)?,
            (Self::Rejected(r), true) => serde_json::to_string_pretty(r)?,
        };
        Ok(rendered)
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let payload = read_payload(&args.payload)?;
    let tracking_id = resolve_tracking_id(args.tracking_id.as_deref(), &payload);
    let run_schema = config.validation.schema && !args.skip_schema;

    tracing::info!(
        tracking_id = %tracking_id,
        path = %args.payload.display(),
        schema = run_schema,
        "validating receipt"
    );

    let outcome = check_payload(&payload, tracking_id, run_schema)?;
    println!("{}", outcome.to_json(args.pretty)?);
    Ok(outcome.exit_code())
}

/// Hard-validate (optionally) and generate warnings for a parsed payload.
pub fn check_payload(
    payload: &Value,
    tracking_id: TrackingId,
    run_schema: bool,
) -> Result<Outcome> {
    if run_schema {
        let validator = ReceiptValidator::new().context("failed to build receipt validator")?;
        match validator.validate(payload) {
            Ok(()) => {}
            Err(SchemaValidationError::Rejected { violations }) => {
                tracing::warn!(
                    tracking_id = %tracking_id,
                    violations = violations.len(),
                    "receipt rejected"
                );
                return Ok(Outcome::Rejected(RejectedReport {
                    validation: ErrorSection {
                        errors: violations.into_inner(),
                    },
                }));
            }
            Err(e) => return Err(e.into()),
        }
    }

    let warnings = generate_all_warnings(Some(payload), Some(tracking_id.as_str()));
    Ok(Outcome::Accepted(AcceptedReport {
        waste_tracking_id: tracking_id,
        validation: WarningSection { warnings },
    }))
}

/// Pick the tracking id: explicit flag, then payload field, then a new UUID.
pub fn resolve_tracking_id(explicit: Option<&str>, payload: &Value) -> TrackingId {
    explicit
        .filter(|id| !id.is_empty())
        .or_else(|| {
            payload
                .get("wasteTrackingId")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
        })
        .map(TrackingId::new)
        .unwrap_or_else(TrackingId::generate)
}

fn read_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("payload is not valid JSON: {}", path.display()))
}
