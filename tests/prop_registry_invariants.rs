// Copyright (c) 2026 Thoth Namer
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use proptest::prelude::*;
use std::collections::BTreeSet;

use thoth_namer::core::context::CallContext;
use thoth_namer::core::registry::error::RegistryError;
use thoth_namer::core::registry::state::NameRegistry;
use thoth_namer::core::types::{Address, TokenUid};

fn addr(tag: u8) -> Address {
    Address::from_key_hash(&[tag; 20])
}

proptest! {
    #[test]
    fn total_fee_is_registrations_times_fee(
        fee in 1u64..1_000_000,
        names in prop::collection::btree_set("[a-z0-9][a-z0-9-]{1,30}[a-z0-9]", 1..20),
        surpluses in prop::collection::vec(0u64..10_000, 20),
    ) {
        let dev = addr(1);
        let init_ctx = CallContext::plain(dev, 0);
        let mut registry = NameRegistry::initialize(&init_ctx, "htr", fee).unwrap();
        let token = TokenUid::native();

        for (i, name) in names.iter().enumerate() {
            let caller = addr((i % 200) as u8 + 2);
            let ctx = CallContext::with_deposit(caller, token.clone(), fee + surpluses[i], 0);
            registry.create_name(&ctx, name, &token).unwrap();
        }

        prop_assert_eq!(registry.total_fee(), names.len() as u64 * fee);
        prop_assert_eq!(registry.name_count(), names.len());
    }

    #[test]
    fn failed_registration_never_mutates(
        fee in 1u64..1_000_000,
        name in "[a-z0-9][a-z0-9-]{1,30}[a-z0-9]",
        short in 0u64..1_000_000,
    ) {
        prop_assume!(short < fee);
        let dev = addr(1);
        let mut registry =
            NameRegistry::initialize(&CallContext::plain(dev, 0), "htr", fee).unwrap();
        let token = TokenUid::native();
        let snapshot = registry.clone();

        // Under-fee deposit.
        let ctx = CallContext::with_deposit(addr(2), token.clone(), short, 0);
        prop_assert_eq!(
            registry.create_name(&ctx, &name, &token).unwrap_err(),
            RegistryError::InsufficientBalance
        );
        prop_assert_eq!(&registry, &snapshot);

        // Wrong token, sufficient amount.
        let wrong = TokenUid::from_bytes(vec![0xab, 0xcd]);
        let ctx = CallContext::with_deposit(addr(2), wrong, fee, 0);
        prop_assert_eq!(
            registry.create_name(&ctx, &name, &token).unwrap_err(),
            RegistryError::InvalidToken
        );
        prop_assert_eq!(&registry, &snapshot);
    }

    #[test]
    fn registered_names_all_pass_the_validator(
        raw in prop::collection::vec(".{0,40}", 1..20),
        fee in 1u64..1000,
    ) {
        let dev = addr(1);
        let mut registry =
            NameRegistry::initialize(&CallContext::plain(dev, 0), "htr", fee).unwrap();
        let token = TokenUid::native();

        let mut accepted = BTreeSet::new();
        for name in &raw {
            let ctx = CallContext::with_deposit(addr(2), token.clone(), fee, 0);
            if registry.create_name(&ctx, name, &token).is_ok() {
                accepted.insert(name.clone());
            }
        }

        for name in &accepted {
            prop_assert!(thoth_namer::core::registry::name::validate_name(name));
            prop_assert!(registry.check_name_existence(name));
        }
        prop_assert_eq!(registry.name_count(), accepted.len());
    }
}
