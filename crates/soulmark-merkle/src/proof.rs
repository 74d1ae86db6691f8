use crate::hasher::AllowlistHasher;

/// Result of a proof request for one (address, name) pair.
///
/// Ineligibility is an expected outcome, not an error: `found` is false,
/// the proof is empty, and `leaf` still carries the hash the pair *would*
/// have so callers can surface it in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOutcome {
    /// Sibling hashes, leaf to root. Empty for single-entry trees and for
    /// ineligible pairs.
    pub proof: Vec<[u8; 32]>,
    /// The leaf hash computed for the requested pair.
    pub leaf: [u8; 32],
    /// Whether the pair is a genuine member of the allowlist.
    pub found: bool,
}

impl ProofOutcome {
    pub(crate) fn found(proof: Vec<[u8; 32]>, leaf: [u8; 32]) -> Self {
        Self {
            proof,
            leaf,
            found: true,
        }
    }

    pub(crate) fn not_found(leaf: [u8; 32]) -> Self {
        Self {
            proof: Vec::new(),
            leaf,
            found: false,
        }
    }
}

/// Verify a membership proof against an expected root.
///
/// Folds the accumulator through the sorted-pair combine over the proof
/// in order, then compares to the root. This mirrors the on-chain claim
/// verifier exactly; any divergence there is an interoperability bug, not
/// a local choice. A `false` result is a normal negative outcome (a
/// stale root or a tampered (leaf, proof) pair), not an error.
pub fn verify_proof<H: AllowlistHasher>(
    leaf: &[u8; 32],
    proof: &[[u8; 32]],
    expected_root: &[u8; 32],
) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |acc, sibling| H::combine(&acc, sibling));
    computed == *expected_root
}
