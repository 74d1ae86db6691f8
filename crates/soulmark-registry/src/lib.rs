/*!
# Soulmark Project Registry

In-memory registry of allowlist projects and the published proof
artifacts claimants consume.

A project's raw entry list is the source of truth; its merkle tree is a
derived, cached view rebuilt in full on every upload (never updated
incrementally). Re-uploading a changed entry set produces a new root and
invalidates previously issued proofs, an expected lifecycle event.

The HTTP layer, persistence, and the on-chain claim contract live
outside this crate; it exposes the store and artifact types they drive.
*/

pub mod artifact;
pub mod errors;
pub mod store;

pub use artifact::{ProofsDocument, ProofsEntry};
pub use errors::{StoreError, StoreResult};
pub use store::{Claim, Project, ProjectStore};

/// 0x-prefixed lowercase hex, the rendering used everywhere a hash or
/// address goes over the wire.
pub fn hex_0x(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
