//! The `{ "success": true, "data"?: T }` body written on the success path.

use serde::Serialize;

use crate::outcome::Outcome;

/// Success envelope.
///
/// `data` is skipped entirely when absent; it is never serialized as `null`
/// unless the payload itself serializes to `null`.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    /// Build the envelope for a successful outcome.
    pub fn from_outcome(outcome: &'a Outcome<T>) -> Self {
        Self {
            success: true,
            data: outcome.data(),
        }
    }
}
