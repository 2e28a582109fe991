//! Hard cross-field constraints.
//!
//! Checks that relate two fields and reject the payload. The lenient
//! counterpart of each (a gap rather than a contradiction) is a warning
//! rule in `wmr-rules`.

use serde_json::Value;
use wmr_core::value::is_blank_at;

use crate::validate::Violation;

/// Every hard cross-field violation in `payload`, in a fixed order.
pub fn check(payload: &Value) -> Vec<Violation> {
    carrier_registration_conflict(payload).into_iter().collect()
}

/// A carrier may give a registration number or a reason for not having
/// one, never both.
pub fn carrier_registration_conflict(payload: &Value) -> Option<Violation> {
    let both = !is_blank_at(payload, "carrier.registrationNumber")
        && !is_blank_at(payload, "carrier.reasonForNoRegistrationNumber");
    both.then(|| {
        Violation::new(
            "carrier.reasonForNoRegistrationNumber",
            "carrier.reasonForNoRegistrationNumber must not be provided when carrier.registrationNumber is provided",
        )
    })
}
