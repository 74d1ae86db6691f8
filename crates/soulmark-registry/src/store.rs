use std::collections::hash_map::Entry;
use std::collections::HashMap;

use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use soulmark_merkle::{
    AllowlistEntry, AllowlistHasher, AllowlistTree, Keccak256Hasher, ProofOutcome,
};
use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::hex_0x;

/// One registered allowlist project.
///
/// The entry list is the source of truth; the tree is a derived, cached
/// view rebuilt on every upsert. Tree internals are never persisted
/// separately from entries, so the two cannot drift.
#[derive(Debug)]
pub struct Project {
    slug: String,
    tree: AllowlistTree,
    created_at: DateTime<Utc>,
}

impl Project {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn entries(&self) -> &[AllowlistEntry] {
        self.tree.entries()
    }

    pub fn tree(&self) -> &AllowlistTree {
        &self.tree
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.tree.root()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One identity a wallet can claim: the project it belongs to plus the
/// proof data the claim call submits (normalized name, its hash, and the
/// sibling path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub slug: String,
    pub name: String,
    pub name_hash: [u8; 32],
    pub proof: Vec<[u8; 32]>,
}

/// In-memory registry of allowlist projects, keyed by lowercased slug.
///
/// Re-uploading a project's entries replaces it wholesale: the tree is
/// rebuilt from scratch and a changed entry set yields a new root,
/// invalidating previously issued proofs. That is the expected lifecycle,
/// not an error.
#[derive(Default)]
pub struct ProjectStore {
    projects: HashMap<String, Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a project from its raw entries.
    ///
    /// Fails with `EmptyAllowlist` when `entries` is empty; no project is
    /// created or replaced in that case.
    pub fn upsert_project(
        &mut self,
        slug: &str,
        entries: Vec<AllowlistEntry>,
    ) -> StoreResult<&Project> {
        let key = slug.to_lowercase();
        let tree = AllowlistTree::build(entries)?;

        debug!(
            slug = %key,
            entries = tree.leaf_count(),
            root = %hex_0x(&tree.root()),
            "rebuilt allowlist tree"
        );

        let project = Project {
            slug: key.clone(),
            tree,
            created_at: Utc::now(),
        };

        match self.projects.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(project);
                Ok(occupied.into_mut())
            }
            Entry::Vacant(vacant) => Ok(vacant.insert(project)),
        }
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.get(&slug.to_lowercase())
    }

    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Generate the membership proof for an (address, name) pair under
    /// one project.
    ///
    /// An unknown slug is an error; an ineligible pair is not, it comes
    /// back as `found: false` with an empty proof.
    pub fn proof_for(&self, slug: &str, address: &Address, name: &str) -> StoreResult<ProofOutcome> {
        let project = self
            .project(slug)
            .ok_or_else(|| StoreError::ProjectNotFound(slug.to_lowercase()))?;

        Ok(project.tree().prove(address, name))
    }

    /// Collect every claimable identity for one wallet across all
    /// registered projects.
    ///
    /// Each entry whose address matches yields one claim with the
    /// normalized name, its hash, and the membership proof under that
    /// project's root. A wallet with no entries anywhere gets an empty
    /// list, which is an ordinary outcome rather than an error. Results
    /// are ordered by (slug, name) for stable output.
    pub fn claims_for(&self, address: &Address) -> Vec<Claim> {
        let mut claims = Vec::new();

        for project in self.projects.values() {
            for entry in project.entries() {
                if entry.address != *address {
                    continue;
                }
                let outcome = project.tree().prove(address, &entry.name);
                claims.push(Claim {
                    slug: project.slug().to_string(),
                    name: entry.normalized_name(),
                    name_hash: Keccak256Hasher::name_hash(&entry.name),
                    proof: outcome.proof,
                });
            }
        }

        claims.sort_by(|a, b| (&a.slug, &a.name).cmp(&(&b.slug, &b.name)));
        claims
    }
}
