//! Cryptographic hash workload.

use sha2::{Digest, Sha256};
use synthbench_core::{Bencher, SuiteContext};

/// Constant input hashed by the suite
pub const HASH_INPUT: &str = "This is a test string for cryptographic hashing.";

/// Lowercase hex SHA-256 digest of `input`
pub fn sha256_hex(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

pub(crate) fn run(b: &mut Bencher, _ctx: &SuiteContext) {
    let digest = b.iter(|| sha256_hex(HASH_INPUT.as_bytes()));
    b.note(format!("Hash: {}", digest));
}
