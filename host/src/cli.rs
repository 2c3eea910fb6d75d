//! One-shot proving from the command line.

use anyhow::{bail, Result};
use roast_proof_core::{require_name, ProofResponse, NAME_REQUIRED};
use std::io::Write;

use crate::runner::ProofRunner;
use crate::server::generate_proof;

/// Prove `name` once and write the response to `out` as pretty JSON.
///
/// Empty names are rejected before the prover runs. A proof that did not
/// verify is still written, then reported as an error so the process exits
/// non-zero.
pub async fn prove_once<W: Write>(
    runner: &dyn ProofRunner,
    name: &str,
    out: &mut W,
) -> Result<ProofResponse> {
    let Some(name) = require_name(Some(name)) else {
        bail!(NAME_REQUIRED);
    };

    let response = generate_proof(runner, &name).await;
    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;

    if !response.success {
        bail!("Proof for {:?} was not verified", name);
    }
    Ok(response)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::runner::CommandRunner;

    fn echo(prefix: &str) -> CommandRunner {
        CommandRunner::new("echo", vec![prefix.to_string()], std::env::temp_dir())
    }

    #[tokio::test]
    async fn test_verified_proof_is_printed() {
        let mut out = Vec::new();
        let response = prove_once(&echo("Proof verified successfully for"), "alice", &mut out)
            .await
            .expect("proof should verify");

        assert_eq!(response.proof_hash, "0xSP1_616c696365");
        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["success"], true);
        assert_eq!(printed["output"], "Proof verified successfully for alice\n");
    }

    #[tokio::test]
    async fn test_unverified_proof_is_printed_then_fails() {
        let runner = CommandRunner::new("false", vec![], std::env::temp_dir());
        let mut out = Vec::new();
        let err = prove_once(&runner, "alice", &mut out).await.unwrap_err();

        assert!(err.to_string().contains("was not verified"));
        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["success"], false);
        assert_eq!(printed["proofHash"], "0xFAILED_616c696365");
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_without_output() {
        let mut out = Vec::new();
        let err = prove_once(&echo("Proof verified successfully"), "", &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Name is required");
        assert!(out.is_empty());
    }
}
