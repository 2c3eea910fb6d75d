//! Prover invocation settings.

use clap::Args;
use std::path::PathBuf;

/// Default prover working directory, relative to the workspace root.
pub const DEFAULT_PROVER_DIR: &str = "roast_proof/script";

/// How to launch the external prover.
///
/// The name being proven is always appended as the final argument.
#[derive(Args, Debug, Clone)]
pub struct ProverConfig {
    /// Working directory for the prover. Relative paths are resolved against
    /// the workspace root.
    #[arg(long, env = "PROVER_DIR", default_value = DEFAULT_PROVER_DIR)]
    pub prover_dir: PathBuf,
    /// Prover executable
    #[arg(long, env = "PROVER_PROGRAM", default_value = "cargo")]
    pub prover_program: String,
    /// Leading prover argument, placed before the name. Repeat for more;
    /// each value is passed as-is, spaces included
    #[arg(long = "prover-arg", allow_hyphen_values = true)]
    pub prover_args: Vec<String>,
    /// Space-separated leading prover arguments, used when no --prover-arg
    /// is given
    #[arg(
        long = "prover-args",
        env = "PROVER_ARGS",
        value_delimiter = ' ',
        allow_hyphen_values = true
    )]
    pub prover_args_line: Vec<String>,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            prover_dir: PathBuf::from(DEFAULT_PROVER_DIR),
            prover_program: "cargo".to_string(),
            prover_args: Vec::new(),
            prover_args_line: Vec::new(),
        }
    }
}

impl ProverConfig {
    /// Arguments placed before the name: `--prover-arg` values, else the
    /// split `--prover-args`/`PROVER_ARGS` line, else the `cargo run` default.
    pub fn leading_args(&self) -> Vec<String> {
        if !self.prover_args.is_empty() {
            return self.prover_args.clone();
        }
        let line: Vec<String> = self
            .prover_args_line
            .iter()
            .filter(|arg| !arg.is_empty())
            .cloned()
            .collect();
        if line.is_empty() {
            default_prover_args()
        } else {
            line
        }
    }

    /// The prover working directory as an absolute-or-rooted path.
    pub fn working_dir(&self) -> PathBuf {
        if self.prover_dir.is_absolute() {
            self.prover_dir.clone()
        } else {
            workspace_root().join(&self.prover_dir)
        }
    }
}

/// `cargo run --bin roast_prove --release --`
fn default_prover_args() -> Vec<String> {
    ["run", "--bin", "roast_prove", "--release", "--"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Parent of this crate's directory, i.e. where the prover sources live.
fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) => parent.to_path_buf(),
        None => manifest_dir,
    }
}
