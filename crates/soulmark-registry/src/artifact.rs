/*!
# Published Proof Artifacts

The "proofs JSON" document handed from the allowlist publisher to
claimants: the merkle root plus, per lowercased address, the normalized
name, its name hash, and the full proof path. Field names and the
0x-prefixed lowercase hex encoding are a stable wire contract; the
claim-time verifier consumes this document as-is.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use soulmark_merkle::{AllowlistHasher, Keccak256Hasher};

use crate::hex_0x;
use crate::store::Project;

/// The published artifact for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofsDocument {
    /// Merkle root, 0x-prefixed lowercase hex.
    #[serde(rename = "merkleRoot")]
    pub merkle_root: String,

    /// Per-claimant proof data, keyed by lowercased 0x address.
    pub entries: BTreeMap<String, ProofsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofsEntry {
    /// Normalized (trimmed, lowercased) display name, as hashed.
    pub name: String,

    /// Hash of the normalized name, submitted alongside the raw name on
    /// claim.
    #[serde(rename = "nameHash")]
    pub name_hash: String,

    /// Sibling hashes, leaf to root, 0x-prefixed lowercase hex.
    pub proof: Vec<String>,
}

impl ProofsDocument {
    /// Build the artifact for a project, generating a proof per entry.
    ///
    /// Duplicate addresses collapse onto one key; both copies of a
    /// duplicated entry resolve to the same proof anyway.
    pub fn for_project(project: &Project) -> Self {
        let tree = project.tree();

        let mut entries = BTreeMap::new();
        for entry in project.entries() {
            let outcome = tree.prove(&entry.address, &entry.name);
            entries.insert(
                hex_0x(entry.address.as_slice()),
                ProofsEntry {
                    name: entry.normalized_name(),
                    name_hash: hex_0x(&Keccak256Hasher::name_hash(&entry.name)),
                    proof: outcome.proof.iter().map(|hash| hex_0x(hash)).collect(),
                },
            );
        }

        Self {
            merkle_root: hex_0x(&project.merkle_root()),
            entries,
        }
    }
}
