// Copyright (c) 2026 Thoth Namer
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use proptest::prelude::*;

use thoth_namer::core::state::merkle::{commitment_root, inclusion_proof, verify_inclusion};

proptest! {
    #[test]
    fn inclusion_proof_verifies_for_any_nonempty_set(
        mut pairs in proptest::collection::vec((any::<u64>(), any::<[u8;32]>()), 1..64),
        index in any::<u16>(),
    ) {
        // Canonical ordering requirement
        pairs.sort_by(|a,b| a.0.cmp(&b.0));

        let kv_pairs: Vec<(Vec<u8>, Vec<u8>)> = pairs
            .iter()
            .map(|(k, v)| (k.to_be_bytes().to_vec(), v.to_vec()))
            .collect();

        let root = commitment_root(&kv_pairs);
        let idx = (index as usize) % kv_pairs.len();

        let proof = inclusion_proof(&kv_pairs, idx).expect("proof exists for non-empty set");
        prop_assert!(verify_inclusion(root, &proof));
    }

    #[test]
    fn tampered_leaf_fails_verification(
        pairs in proptest::collection::vec((any::<u64>(), any::<[u8;32]>()), 1..32),
    ) {
        let kv_pairs: Vec<(Vec<u8>, Vec<u8>)> = pairs
            .iter()
            .map(|(k, v)| (k.to_be_bytes().to_vec(), v.to_vec()))
            .collect();

        let root = commitment_root(&kv_pairs);
        let mut proof = inclusion_proof(&kv_pairs, 0).unwrap();
        proof.leaf[0] ^= 0x01;
        prop_assert!(!verify_inclusion(root, &proof));
    }
}

#[test]
fn empty_set_commits_to_zero() {
    assert_eq!(commitment_root(&[]), [0u8; 32]);
    assert!(inclusion_proof(&[], 0).is_none());
}
