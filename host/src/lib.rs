//! Host-side proving service for roast proofs.
//!
//! This crate launches the external SP1 prover as a subprocess and exposes
//! it over HTTP, providing a small interface for requesting a proof by name
//! and checking service liveness.

pub mod cli;
pub mod config;
pub mod runner;
pub mod server;
