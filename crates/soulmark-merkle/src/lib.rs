/*!
# Soulmark Merkle Allowlist Engine

The core of Soulmark: deterministic hashing, tree construction, and
membership proofs for (name, wallet-address) allowlists. A platform
registers an allowlist, publishes only the tree's 32-byte root on-chain,
and end users later prove membership with a logarithmic sibling path.

## Pipeline

1. [`AllowlistEntry`]: one (name, address) row.
2. [`AllowlistHasher`]: name hash, leaf hash, and the sorted-pair
   combine. [`Keccak256Hasher`] is the production strategy, matching the
   on-chain claim contract byte for byte.
3. [`AllowlistTree`]: sorted leaves folded pairwise into a root, with
   per-level structure retained for proof extraction.
4. [`AllowlistTree::prove`] / [`verify_proof`]: proof generation and the
   mirror of the on-chain verification walk.

Everything here is pure and synchronous; independent allowlists can be
built and proven in parallel without coordination.

## Compatibility

The leaf packing (`address(20) || name_hash(32)`), the trim+lowercase
name normalization, and the ascending sorted-pair combine are a wire
contract shared with the on-chain verifier. Changing any of them silently
invalidates every issued proof.
*/

pub mod entry;
pub mod error;
pub mod hasher;
pub mod proof;
pub mod tree;

pub use entry::AllowlistEntry;
pub use error::{MerkleError, MerkleResult};
pub use hasher::{normalize_name, AllowlistHasher, Keccak256Hasher};
pub use proof::{verify_proof, ProofOutcome};
pub use tree::AllowlistTree;
