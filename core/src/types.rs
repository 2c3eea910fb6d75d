//! Wire types shared by the proving service and its clients.
//!
//! Field names are camelCase on the wire to match the browser frontend.

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Error message returned when a request carries no usable name.
pub const NAME_REQUIRED: &str = "Name is required";

/// The roast subject echoed back alongside every proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastData {
    pub name: String,
}

/// Result of one proof attempt.
///
/// `success` and `is_real_proof` always carry the same value; both are kept
/// because existing clients read either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub success: bool,
    pub is_real_proof: bool,
    pub proof_hash: String,
    /// Prover stdout, verbatim.
    pub output: String,
    pub roast_data: RoastData,
}

/// Failure body for rejected or faulted requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Liveness check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

/// What the prover process left behind once it exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProverRun {
    /// The process was spawned and exited with a success status.
    pub exited_ok: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProverRun {
    /// A run whose process never started. Indistinguishable from any other
    /// failed proof once it reaches the response.
    pub fn not_started() -> Self {
        Self::default()
    }
}
