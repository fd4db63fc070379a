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

use thoth_namer::core::state::persistent::PersistentStore;
use thoth_namer::core::state::store::{verify_proof, KvOp, MemoryStore, StateStore};

fn seed(st: &impl StateStore) {
    st.commit_atomic(vec![
        KvOp::Put {
            key: b"domain".to_vec(),
            value: b"htr".to_vec(),
        },
        KvOp::Put {
            key: b"fee".to_vec(),
            value: b"100".to_vec(),
        },
        KvOp::Put {
            key: b"names/testname".to_vec(),
            value: b"record".to_vec(),
        },
    ])
    .unwrap();
}

#[test]
fn test_state_root_and_proof() {
    let dir = tempfile::tempdir().unwrap();
    let st = PersistentStore::open(dir.path().to_str().unwrap()).unwrap();
    seed(&st);

    let root = st.state_root().unwrap();
    let (root2, proof) = st.prove_key(b"fee").unwrap().unwrap();
    assert_eq!(root, root2);
    assert!(verify_proof(root, &proof));

    assert!(st.prove_key(b"absent").unwrap().is_none());
}

#[test]
fn test_backends_agree_on_root() {
    let dir = tempfile::tempdir().unwrap();
    let sled_store = PersistentStore::open(dir.path().to_str().unwrap()).unwrap();
    let mem_store = MemoryStore::new();
    seed(&sled_store);
    seed(&mem_store);

    assert_eq!(
        sled_store.state_root().unwrap(),
        mem_store.state_root().unwrap()
    );
}

#[test]
fn test_scan_prefix() {
    let st = MemoryStore::new();
    seed(&st);

    let names = st.scan_prefix(b"names/").unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].0, b"names/testname".to_vec());

    st.commit_atomic(vec![KvOp::Del {
        key: b"names/testname".to_vec(),
    }])
    .unwrap();
    assert!(st.scan_prefix(b"names/").unwrap().is_empty());
}
