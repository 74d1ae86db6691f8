use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A tree with no leaves has no meaningful root; the build is
    /// rejected rather than returning a degenerate value.
    #[error("cannot build a merkle tree from an empty allowlist")]
    EmptyAllowlist,
}
