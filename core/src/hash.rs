//! Synthetic proof identifiers.
//!
//! A proof hash names the attempt, it does not commit to the proof bytes:
//! the outcome prefix followed by the lowercase hex of the name's UTF-8 bytes.

use alloc::format;
use alloc::string::String;

/// Prefix for names whose proof verified.
pub const VERIFIED_PREFIX: &str = "0xSP1_";

/// Prefix for every other outcome.
pub const FAILED_PREFIX: &str = "0xFAILED_";

/// Build the proof hash for `name` given whether its proof verified.
pub fn proof_hash(name: &str, verified: bool) -> String {
    let prefix = if verified { VERIFIED_PREFIX } else { FAILED_PREFIX };
    format!("{}{}", prefix, hex::encode(name.as_bytes()))
}
