use std::marker::PhantomData;

use alloy_primitives::Address;

use crate::entry::AllowlistEntry;
use crate::error::{MerkleError, MerkleResult};
use crate::hasher::{AllowlistHasher, Keccak256Hasher};
use crate::proof::ProofOutcome;

/// A binary merkle tree over one project's allowlist.
///
/// The base level is the entry leaf hashes sorted ascending by byte
/// value, so the tree's shape (and therefore the root) depends only on
/// the *set* of entries, never on upload order. Levels fold pairwise
/// left-to-right; an odd trailing node carries up unchanged (no
/// duplication, no padding).
///
/// The tree is a pure function of the entry list: rebuilding from the
/// same entries reproduces the same root and the same proof for every
/// entry, so only raw entries need to be persisted.
///
/// ## Key Properties
///
/// - **Ordering**: sorted base level; sorted-pair combine at every level
/// - **Proof format**: flat sibling path, leaf to root, no position flags
/// - **Compatibility**: root and proofs verify against the on-chain
///   claim contract, which applies the same leaf packing and combine rule
#[derive(Clone, Debug)]
pub struct AllowlistTree<H = Keccak256Hasher> {
    /// The original entries, in upload order, kept for eligibility lookups.
    entries: Vec<AllowlistEntry>,
    /// Node hashes per level; `levels[0]` is the sorted base level and the
    /// last level holds exactly the root.
    levels: Vec<Vec<[u8; 32]>>,
    root: [u8; 32],
    _hasher: PhantomData<H>,
}

impl<H: AllowlistHasher> AllowlistTree<H> {
    /// Build a tree from a non-empty entry list.
    ///
    /// Duplicate (address, name) pairs are tolerated: they produce
    /// duplicate leaves and both copies resolve to the same proof.
    pub fn build(entries: Vec<AllowlistEntry>) -> MerkleResult<Self> {
        if entries.is_empty() {
            return Err(MerkleError::EmptyAllowlist);
        }

        let mut base: Vec<[u8; 32]> = entries
            .iter()
            .map(|entry| H::leaf_hash(&entry.address, &entry.name))
            .collect();
        base.sort_unstable();

        let mut levels = vec![base];
        while levels
            .last()
            .map(|level| level.len() > 1)
            .unwrap_or(false)
        {
            let current = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(H::combine(left, right)),
                    // Odd trailing node carries up unchanged.
                    [lone] => next.push(*lone),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                }
            }
            levels.push(next);
        }

        let root = levels[levels.len() - 1][0];

        Ok(Self {
            entries,
            levels,
            root,
            _hasher: PhantomData,
        })
    }

    /// The merkle root. For a single-entry allowlist this is the entry's
    /// leaf hash itself.
    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    /// The original entries, in upload order.
    pub fn entries(&self) -> &[AllowlistEntry] {
        &self.entries
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves (0 for a single-entry tree).
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Generate the membership proof for an (address, name) pair.
    ///
    /// Eligibility is a genuine data match against the original entry
    /// list (address by raw bytes, name after trim+lowercase), not
    /// merely "some leaf equals the target hash". An ineligible pair is
    /// an expected outcome, reported as `found: false` with an empty
    /// proof; the computed leaf is still returned for diagnostics.
    pub fn prove(&self, address: &Address, name: &str) -> ProofOutcome {
        let leaf = H::leaf_hash(address, name);

        let eligible = self
            .entries
            .iter()
            .any(|entry| entry.matches(address, name));
        if !eligible {
            return ProofOutcome::not_found(leaf);
        }

        // For a well-formed match the leaf is always present in the
        // sorted base level (leaf formula round-trip).
        let Some(mut index) = self.levels[0].iter().position(|hash| *hash == leaf) else {
            return ProofOutcome::not_found(leaf);
        };

        let mut proof = Vec::with_capacity(self.depth());
        for level in &self.levels {
            if level.len() == 1 {
                break;
            }
            let sibling = index ^ 1;
            // A carried-up unpaired node has no sibling at this level and
            // contributes nothing to the proof.
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }

        ProofOutcome::found(proof, leaf)
    }
}
