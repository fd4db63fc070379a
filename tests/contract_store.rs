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

use thoth_namer::core::context::{CallContext, TransferAction};
use thoth_namer::core::contract::{ContractError, NamerContract};
use thoth_namer::core::registry::error::RegistryError;
use thoth_namer::core::state::persistent::PersistentStore;
use thoth_namer::core::state::store::MemoryStore;
use thoth_namer::core::types::{Address, TokenUid};

const FEE: u64 = 100;

fn addr(tag: u8) -> Address {
    Address::from_key_hash(&[tag; 20])
}

fn deposit_ctx(caller: Address, amount: u64) -> CallContext {
    CallContext::with_deposit(caller, TokenUid::native(), amount, 1_700_000_000)
}

fn memory_contract() -> NamerContract<MemoryStore> {
    NamerContract::new(MemoryStore::new(), TokenUid::native())
}

#[test]
fn test_initialize_once() {
    let contract = memory_contract();
    let dev = addr(1);
    let ctx = CallContext::plain(dev, 0);

    contract.initialize(&ctx, "htr", FEE).unwrap();
    assert_eq!(contract.get_dev_address().unwrap(), dev.to_base58());

    // A second initialization is rejected, even by the dev.
    assert!(matches!(
        contract.initialize(&ctx, "htr", FEE).unwrap_err(),
        ContractError::AlreadyInitialized
    ));
}

#[test]
fn test_overlong_domain_cannot_brick_an_instance() {
    let contract = memory_contract();
    let dev = addr(1);
    let ctx = CallContext::plain(dev, 0);

    // An over-long domain is rejected before anything commits, so the
    // instance stays uninitialized and every stored value stays within
    // the load path's decode cap.
    let err = contract
        .initialize(&ctx, &"d".repeat(2000), FEE)
        .unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::InvalidDomain)
    ));
    assert!(matches!(
        contract.info().unwrap_err(),
        ContractError::NotInitialized
    ));

    // The instance is still usable afterwards.
    contract.initialize(&ctx, "htr", FEE).unwrap();
    contract
        .create_name(&deposit_ctx(addr(2), FEE), "testname")
        .unwrap();
    let (domain, _, _, _) = contract.info().unwrap();
    assert_eq!(domain, "htr");
}

#[test]
fn test_operations_require_initialization() {
    let contract = memory_contract();
    let ctx = deposit_ctx(addr(2), FEE);

    assert!(matches!(
        contract.create_name(&ctx, "testname").unwrap_err(),
        ContractError::NotInitialized
    ));
    assert!(matches!(
        contract.resolve_name("testname").unwrap_err(),
        ContractError::NotInitialized
    ));
    assert!(matches!(
        contract.check_name_existence("testname").unwrap_err(),
        ContractError::NotInitialized
    ));
    assert!(matches!(
        contract.get_dev_address().unwrap_err(),
        ContractError::NotInitialized
    ));
}

#[test]
fn test_failed_calls_commit_nothing() {
    let contract = memory_contract();
    let dev = addr(1);
    contract
        .initialize(&CallContext::plain(dev, 0), "htr", FEE)
        .unwrap();
    contract
        .create_name(&deposit_ctx(addr(2), FEE), "testname")
        .unwrap();

    let root = contract.state_root().unwrap();

    // Duplicate registration.
    let err = contract
        .create_name(&deposit_ctx(addr(3), FEE), "testname")
        .unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::NameAlreadyExists)
    ));
    assert_eq!(contract.state_root().unwrap(), root);

    // Under-fee registration.
    let err = contract
        .create_name(&deposit_ctx(addr(3), FEE - 1), "othername")
        .unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::InsufficientBalance)
    ));
    assert_eq!(contract.state_root().unwrap(), root);

    // Unauthorized fee change.
    let err = contract
        .change_fee(&CallContext::plain(addr(3), 0), 500)
        .unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::NotAuthorized)
    ));
    assert_eq!(contract.state_root().unwrap(), root);

    // Two attached actions.
    let two = CallContext::new(
        addr(3),
        vec![
            TransferAction::deposit(TokenUid::native(), FEE),
            TransferAction::deposit(TokenUid::native(), FEE),
        ],
        0,
    );
    let err = contract.create_name(&two, "othername").unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::TooManyActions)
    ));
    assert_eq!(contract.state_root().unwrap(), root);
}

#[test]
fn test_full_flow_over_sled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap().to_string();
    let dev = addr(1);
    let owner = addr(2);
    let resolving = addr(3);

    let root_before_reopen;
    {
        let store = PersistentStore::open(&path).unwrap();
        let contract = NamerContract::new(store, TokenUid::native());

        contract
            .initialize(&CallContext::plain(dev, 0), "htr", FEE)
            .unwrap();
        contract
            .create_name(&deposit_ctx(owner, FEE), "testname")
            .unwrap();

        assert!(contract.check_name_existence("testname").unwrap());
        assert_eq!(contract.get_name_owner("testname").unwrap(), owner);

        contract
            .change_resolving_address(&CallContext::plain(owner, 0), "testname", resolving)
            .unwrap();
        assert_eq!(
            contract.resolve_name("testname").unwrap(),
            resolving.to_base58()
        );

        let (domain, fee, total_fee, dev_addr) = contract.info().unwrap();
        assert_eq!(domain, "htr");
        assert_eq!(fee, FEE);
        assert_eq!(total_fee, FEE);
        assert_eq!(dev_addr, dev);

        root_before_reopen = contract.state_root().unwrap();
    }

    // State and root survive a reopen.
    let store = PersistentStore::open(&path).unwrap();
    let contract = NamerContract::new(store, TokenUid::native());
    assert_eq!(contract.state_root().unwrap(), root_before_reopen);
    assert_eq!(
        contract.resolve_name("testname").unwrap(),
        resolving.to_base58()
    );
    assert_eq!(contract.get_name_owner("testname").unwrap(), owner);
}

#[test]
fn test_dev_operations_over_store() {
    let contract = memory_contract();
    let dev = addr(1);
    contract
        .initialize(&CallContext::plain(dev, 0), "htr", FEE)
        .unwrap();

    contract
        .change_fee(&CallContext::plain(dev, 0), 200)
        .unwrap();
    let (_, fee, _, _) = contract.info().unwrap();
    assert_eq!(fee, 200);

    let new_dev = addr(5);
    contract
        .change_dev_address(&CallContext::plain(dev, 0), new_dev)
        .unwrap();
    assert_eq!(contract.get_dev_address().unwrap(), new_dev.to_base58());

    // Registration now needs the raised fee.
    let err = contract
        .create_name(&deposit_ctx(addr(2), FEE), "testname")
        .unwrap_err();
    assert!(matches!(
        err,
        ContractError::Registry(RegistryError::InsufficientBalance)
    ));
    contract
        .create_name(&deposit_ctx(addr(2), 200), "testname")
        .unwrap();
}
