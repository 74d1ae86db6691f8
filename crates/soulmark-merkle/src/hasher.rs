use alloy_primitives::Address;
use tiny_keccak::{Hasher as _, Keccak};

/// Normalizes a display name before hashing: surrounding whitespace is
/// trimmed, then the remainder is lowercased.
///
/// The on-chain claim contract recomputes the name hash from the raw name
/// with the same rule, so both sides must normalize identically.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Hashing strategy for the allowlist tree.
///
/// All tree and proof logic is generic over this trait so the digest
/// algorithm can be swapped without touching the builder or the proof
/// walker. The byte layout and the sorted-pair rule are fixed by the
/// provided methods and must stay bit-compatible with the on-chain
/// verifier; implementors only supply the raw digest.
///
/// ## Hashing Scheme
///
/// - **Name hash**: `hash(lowercase(trim(name)))`, surfaced on its own
///   because the claim call submits it alongside the raw name.
/// - **Leaf**: `hash(address_bytes(20) || name_hash(32))`. The address is
///   packed raw, the name goes through the intermediate name hash. This
///   52-byte packing is what the contract recomputes on claim.
/// - **Internal node**: `hash(min(a, b) || max(a, b))`. Ordering the pair
///   by byte value before concatenation makes the combine step commutative,
///   so proofs carry no left/right flags.
pub trait AllowlistHasher {
    /// Raw 32-byte digest of arbitrary input.
    fn hash(data: &[u8]) -> [u8; 32];

    /// Hash of the normalized name.
    fn name_hash(name: &str) -> [u8; 32] {
        Self::hash(normalize_name(name).as_bytes())
    }

    /// Leaf hash for one allowlist entry.
    fn leaf_hash(address: &Address, name: &str) -> [u8; 32] {
        let mut packed = [0u8; 52];
        packed[..20].copy_from_slice(address.as_slice());
        packed[20..].copy_from_slice(&Self::name_hash(name));
        Self::hash(&packed)
    }

    /// Parent hash of two sibling nodes, sorted-pair rule.
    fn combine(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut packed = [0u8; 64];
        packed[..32].copy_from_slice(lo);
        packed[32..].copy_from_slice(hi);
        Self::hash(&packed)
    }
}

/// Keccak-256 hashing strategy, matching the Ethereum claim contract.
#[derive(Clone, Debug)]
pub struct Keccak256Hasher;

impl AllowlistHasher for Keccak256Hasher {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut keccak = Keccak::v256();
        keccak.update(data);
        let mut output = [0u8; 32];
        keccak.finalize(&mut output);
        output
    }
}
