//! Deterministic 64-bit identifier derivation.
//!
//! Ids are persisted and compared across independent executions, so the
//! mapping must never change: sha256 over the input, then the first 8 bytes
//! of the digest read as a **little-endian** u64. Collisions surface to
//! callers as "already exists" conflicts, never as a distinct error.

use near_sdk::{env, AccountId};

pub fn derive(data: &[u8]) -> u64 {
    let digest = env::sha256_array(data);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

/// Seed for an order id: the buyer identifier concatenated with the content
/// hash. A given buyer therefore maps to exactly one order id per video,
/// which is what makes re-purchase structurally impossible.
pub fn order_seed(buyer: &AccountId, content_hash: &str) -> Vec<u8> {
    let mut seed = Vec::with_capacity(buyer.as_str().len() + content_hash.len());
    seed.extend_from_slice(buyer.as_bytes());
    seed.extend_from_slice(content_hash.as_bytes());
    seed
}
