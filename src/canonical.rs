//! Fingerprints for report artifacts.
//!
//! A fingerprint is the xxh64 of a value's compact JSON encoding. Re-running
//! over the same corpus must reproduce every fingerprint, and so must
//! reloading a written `structural_metrics.json` and hashing it again.
//!
//! ## Determinism Guarantees
//!
//! - Struct fields encode in declaration order; hashed maps are `BTreeMap`
//! - `serde_json` is built with `float_roundtrip`, so a ratio such as `1/3`
//!   parses back to the exact `f64` it was written from

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

const FINGERPRINT_SEED: u64 = 0;

/// Compact JSON encoding used as fingerprint input.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    // Maps in metric and comparison types are keyed by strings
    serde_json::to_vec(value).expect("metric types always encode as JSON")
}

/// xxh64 fingerprint of a value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), FINGERPRINT_SEED)
}

/// Fingerprint as 16 lowercase hex digits, as stored in the manifest.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
