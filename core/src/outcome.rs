//! Judging a prover run and synthesizing the response.
//!
//! The prover is scraped as plain text: a run counts as a real proof only if
//! the process exited successfully AND its stdout contains [`PROOF_MARKER`].
//! Crashes, bad exits, missing markers and spawn failures all collapse into
//! the same failed outcome.

use alloc::string::{String, ToString};

use crate::hash::proof_hash;
use crate::types::{ProofResponse, ProverRun, RoastData};

/// Line printed by the prover after it verified its own proof.
pub const PROOF_MARKER: &str = "Proof verified successfully";

/// Whether a run produced a verified proof.
pub fn is_verified(run: &ProverRun) -> bool {
    run.exited_ok && run.stdout.contains(PROOF_MARKER)
}

/// Build the response for `name` from a finished prover run.
pub fn build_response(name: &str, run: ProverRun) -> ProofResponse {
    let verified = is_verified(&run);
    ProofResponse {
        success: verified,
        is_real_proof: verified,
        proof_hash: proof_hash(name, verified),
        output: run.stdout,
        roast_data: RoastData {
            name: name.to_string(),
        },
    }
}

/// Validate a candidate name. Empty names are treated as missing.
pub fn require_name(name: Option<&str>) -> Option<String> {
    match name {
        Some(n) if !n.is_empty() => Some(n.to_string()),
        _ => None,
    }
}
