//! Core types and outcome logic for roast proof requests.
//!
//! This crate is `no_std` compatible (with `alloc`) and performs no I/O:
//! it turns what the external prover printed into the response the HTTP
//! service returns. Enable the `std` feature for host-side use.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod outcome;
pub mod hash;

pub use types::*;
pub use outcome::*;
pub use hash::*;
