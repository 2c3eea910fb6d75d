//! Launching the external prover.
//!
//! The name is handed to the prover as its own argv element; nothing here
//! goes through a shell, so quotes, `;` and `$(...)` in a name reach the
//! prover as literal text.
//!
//! A started prover is never cancelled: it outlives the request that
//! launched it, even if the client goes away.

use async_trait::async_trait;
use roast_proof_core::ProverRun;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::config::ProverConfig;

/// Runs the prover for one name and reports what it printed.
///
/// Implementations wait for the process to exit. There is no timeout: a
/// hung prover holds its request open indefinitely.
#[async_trait]
pub trait ProofRunner: Send + Sync {
    /// `Err` means the process could not be started or waited on.
    async fn run(&self, name: &str) -> io::Result<ProverRun>;
}

/// Spawns a real subprocess per request.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandRunner {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
        }
    }

    pub fn from_config(config: &ProverConfig) -> Self {
        Self::new(
            config.prover_program.clone(),
            config.leading_args(),
            config.working_dir(),
        )
    }

    pub fn working_dir(&self) -> &PathBuf {
        &self.working_dir
    }
}

#[async_trait]
impl ProofRunner for CommandRunner {
    async fn run(&self, name: &str) -> io::Result<ProverRun> {
        debug!(
            program = %self.program,
            working_dir = %self.working_dir.display(),
            "Spawning prover"
        );

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(name)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // The child and its pipes belong to a detached task, so a dropped
        // request leaves the prover running to completion.
        let output = tokio::spawn(async move { command.output().await })
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??;

        Ok(ProverRun {
            exited_ok: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
