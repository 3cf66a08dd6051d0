//! Content fingerprints for version spaces.
//!
//! A fingerprint is a SHA-256 digest over the canonical CBOR encoding of both
//! boundary sets. Boundary members are kept sorted, so two runs that reach the
//! same version space produce the same fingerprint regardless of how the
//! members were discovered.
//!
//! # Citations
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - CBOR: RFC 8949 (2020)

use crate::boundary::BoundarySet;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// A 256‑bit hash value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashValue(pub [u8; 32]);

impl HashValue {
    /// Creates a zero hash (all zeros).
    #[inline]
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns the raw byte array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes SHA‑256 of `data` with domain separation.
    ///
    /// Hashes `b"VS:<domain>:v1" || len(data) as u64 LE || data`.
    pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"VS:");
        hasher.update(domain);
        hasher.update(b":v1");
        hasher.update((data.len() as u64).to_le_bytes());
        hasher.update(data);
        Self(hasher.finalize().into())
    }
}

impl std::fmt::Display for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 4 bytes are enough to tell fingerprints apart in logs.
        write!(
            f,
            "HashValue({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Error raised when boundary members cannot be encoded.
#[derive(Debug, Error)]
#[error("failed to encode boundary sets: {0}")]
pub struct FingerprintError(#[from] pub serde_cbor::Error);

/// Fingerprints a pair of boundary sets.
pub fn boundary_fingerprint<V: Serialize>(
    specific: &BoundarySet<V>,
    general: &BoundarySet<V>,
) -> Result<HashValue, FingerprintError> {
    let bytes = serde_cbor::to_vec(&(specific, general))?;
    Ok(HashValue::hash_with_domain(b"BOUNDARIES", &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use crate::core::{Attribute, Hypothesis};

    #[test]
    fn domain_separation() {
        let a = HashValue::hash_with_domain(b"A", b"payload");
        let b = HashValue::hash_with_domain(b"B", b"payload");
        assert_ne!(a, b);
        assert_eq!(a, HashValue::hash_with_domain(b"A", b"payload"));
        assert_ne!(a, HashValue::zero());
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let one = Hypothesis::new(vec![Attribute::Value(1u8), Attribute::Wildcard]);
        let two = Hypothesis::new(vec![Attribute::Wildcard, Attribute::Value(0u8)]);
        let s = BoundarySet::specific(2);
        let g1 = BoundarySet::from_members(BoundaryKind::General, vec![one.clone(), two.clone()]);
        let g2 = BoundarySet::from_members(BoundaryKind::General, vec![two, one]);
        assert_eq!(
            boundary_fingerprint(&s, &g1).unwrap(),
            boundary_fingerprint(&s, &g2).unwrap()
        );
    }

    #[test]
    fn fingerprint_distinguishes_boundaries() {
        let s = BoundarySet::<u8>::specific(2);
        let g = BoundarySet::<u8>::general(2);
        let other_g = BoundarySet::<u8>::general(3);
        assert_ne!(
            boundary_fingerprint(&s, &g).unwrap(),
            boundary_fingerprint(&s, &other_g).unwrap()
        );
    }

    #[test]
    fn display_is_abbreviated() {
        let text = HashValue::zero().to_string();
        assert_eq!(text, "HashValue(00000000…)");
    }
}
