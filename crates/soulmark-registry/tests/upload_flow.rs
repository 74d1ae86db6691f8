//! End-to-end upload flow: CSV text in, verified proofs out.

use alloy_primitives::Address;
use soulmark_csvs::parse_allowlist_text;
use soulmark_merkle::{verify_proof, AllowlistEntry, AllowlistHasher, Keccak256Hasher};
use soulmark_registry::{hex_0x, ProofsDocument, ProjectStore};
use std::str::FromStr;

const CSV: &str = "\
name,address
Alice,0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA
bob,0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb
carol,0xcccccccccccccccccccccccccccccccccccccccc
";

fn upload(store: &mut ProjectStore, slug: &str, csv_text: &str) -> [u8; 32] {
    let rows = parse_allowlist_text(csv_text).unwrap();
    let entries: Vec<AllowlistEntry> = rows.into_iter().map(Into::into).collect();
    store.upsert_project(slug, entries).unwrap().merkle_root()
}

#[test]
fn csv_upload_to_verified_proof() {
    let mut store = ProjectStore::new();
    let root = upload(&mut store, "genesis", CSV);

    // Claimant queries with a lowercase address and a case variant of
    // the uploaded name.
    let alice = Address::from_str("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
    let outcome = store.proof_for("genesis", &alice, "alice").unwrap();
    assert!(outcome.found);
    assert_eq!(outcome.leaf, Keccak256Hasher::leaf_hash(&alice, "alice"));
    assert!(verify_proof::<Keccak256Hasher>(&outcome.leaf, &outcome.proof, &root));

    // A wallet that never appeared is ineligible, not an error.
    let stranger = Address::repeat_byte(0xEE);
    let outcome = store.proof_for("genesis", &stranger, "eve").unwrap();
    assert!(!outcome.found);
    assert!(outcome.proof.is_empty());
}

#[test]
fn published_artifact_matches_store_proofs() {
    let mut store = ProjectStore::new();
    let root = upload(&mut store, "genesis", CSV);

    let doc = ProofsDocument::for_project(store.project("genesis").unwrap());
    assert_eq!(doc.merkle_root, hex_0x(&root));
    assert_eq!(doc.entries.len(), 3);

    // Every published entry carries the same proof the store would
    // generate on demand.
    for (address, published) in &doc.entries {
        let address = Address::from_str(address).unwrap();
        let outcome = store
            .proof_for("genesis", &address, &published.name)
            .unwrap();
        assert!(outcome.found);

        let rendered: Vec<String> = outcome.proof.iter().map(|hash| hex_0x(hash)).collect();
        assert_eq!(&rendered, &published.proof);
    }
}

#[test]
fn reupload_in_different_order_keeps_root_stable() {
    let reordered = "\
name,address
carol,0xcccccccccccccccccccccccccccccccccccccccc
bob,0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb
Alice,0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA
";

    let mut store = ProjectStore::new();
    let first = upload(&mut store, "genesis", CSV);
    let second = upload(&mut store, "genesis", reordered);
    assert_eq!(first, second, "root is a pure function of the entry set");
}

#[test]
fn reupload_with_new_member_invalidates_old_proofs() {
    let mut store = ProjectStore::new();
    let old_root = upload(&mut store, "genesis", CSV);

    let alice = Address::from_str("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
    let old_proof = store.proof_for("genesis", &alice, "alice").unwrap();

    let grown = format!("{CSV}dave,0xdddddddddddddddddddddddddddddddddddddddd\n");
    let new_root = upload(&mut store, "genesis", &grown);
    assert_ne!(old_root, new_root);

    // The stale proof no longer verifies under the new root; a freshly
    // issued one does.
    assert!(!verify_proof::<Keccak256Hasher>(
        &old_proof.leaf,
        &old_proof.proof,
        &new_root
    ));
    let fresh = store.proof_for("genesis", &alice, "alice").unwrap();
    assert!(verify_proof::<Keccak256Hasher>(&fresh.leaf, &fresh.proof, &new_root));
}
