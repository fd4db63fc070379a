// Copyright (c) 2026 Thoth Namer
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Deterministic commitment tree over registry store contents.
//!
//! leaf = H( "ThothNamer-State-Leaf-v1" || H(key) || H(value) )
//! node = H( "ThothNamer-State-Node-v1" || left || right )
//!
//! An odd node at the end of a level is paired with itself. The empty
//! store commits to the all-zero digest.

use ring::digest;

/// 32-byte SHA-256 digest.
pub type Digest32 = [u8; 32];

const LEAF_TAG: &[u8] = b"ThothNamer-State-Leaf-v1";
const NODE_TAG: &[u8] = b"ThothNamer-State-Node-v1";

/// Position of the sibling relative to the running hash.
#[derive(Clone, Copy, Debug)]
pub enum SiblingSide {
    /// Sibling hashes on the left.
    Left,
    /// Sibling hashes on the right.
    Right,
}

/// One level of an inclusion proof path.
#[derive(Clone, Debug)]
pub struct ProofStep {
    /// Which side the sibling sits on.
    pub side: SiblingSide,
    /// Sibling digest at this level.
    pub sibling: Digest32,
}

/// Inclusion proof from a leaf up to the commitment root.
#[derive(Clone, Debug)]
pub struct InclusionProof {
    /// Committed leaf digest.
    pub leaf: Digest32,
    /// Path from leaf level to the root.
    pub path: Vec<ProofStep>,
}

fn h(data: &[u8]) -> Digest32 {
    let d = digest::digest(&digest::SHA256, data);
    let mut out = [0u8; 32];
    out.copy_from_slice(d.as_ref());
    out
}

fn leaf_digest(key: &[u8], value: &[u8]) -> Digest32 {
    let mut buf = Vec::with_capacity(LEAF_TAG.len() + 64);
    buf.extend_from_slice(LEAF_TAG);
    buf.extend_from_slice(&h(key));
    buf.extend_from_slice(&h(value));
    h(&buf)
}

fn node_digest(left: Digest32, right: Digest32) -> Digest32 {
    let mut buf = Vec::with_capacity(NODE_TAG.len() + 64);
    buf.extend_from_slice(NODE_TAG);
    buf.extend_from_slice(&left);
    buf.extend_from_slice(&right);
    h(&buf)
}

/// Fold one tree level into its parent level, duplicating a trailing odd
/// node.
fn fold_level(level: &[Digest32]) -> Vec<Digest32> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    for pair in level.chunks(2) {
        let left = pair[0];
        let right = if pair.len() == 2 { pair[1] } else { pair[0] };
        next.push(node_digest(left, right));
    }
    next
}

fn leaf_level(pairs: &[(Vec<u8>, Vec<u8>)]) -> Vec<Digest32> {
    pairs.iter().map(|(k, v)| leaf_digest(k, v)).collect()
}

/// Commitment root over sorted (key, value) pairs.
pub fn commitment_root(pairs: &[(Vec<u8>, Vec<u8>)]) -> Digest32 {
    if pairs.is_empty() {
        return [0u8; 32];
    }
    let mut level = leaf_level(pairs);
    while level.len() > 1 {
        level = fold_level(&level);
    }
    level[0]
}

/// Inclusion proof for the pair at `index` of sorted (key, value) pairs.
pub fn inclusion_proof(pairs: &[(Vec<u8>, Vec<u8>)], index: usize) -> Option<InclusionProof> {
    if index >= pairs.len() {
        return None;
    }

    let mut level = leaf_level(pairs);
    let leaf = level[index];
    let mut idx = index;
    let mut path = Vec::new();

    while level.len() > 1 {
        let is_right = idx % 2 == 1;
        let sib_idx = if is_right { idx - 1 } else { idx + 1 };
        let sibling = if sib_idx < level.len() {
            level[sib_idx]
        } else {
            level[idx]
        };
        path.push(ProofStep {
            side: if is_right {
                SiblingSide::Left
            } else {
                SiblingSide::Right
            },
            sibling,
        });
        level = fold_level(&level);
        idx /= 2;
    }

    Some(InclusionProof { leaf, path })
}

/// Check an inclusion proof against a commitment root.
pub fn verify_inclusion(root: Digest32, proof: &InclusionProof) -> bool {
    let mut cur = proof.leaf;
    for step in &proof.path {
        cur = match step.side {
            SiblingSide::Left => node_digest(step.sibling, cur),
            SiblingSide::Right => node_digest(cur, step.sibling),
        };
    }
    cur == root
}
