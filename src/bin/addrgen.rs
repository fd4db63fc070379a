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

//! Prints fresh random base58 test addresses, one per line.

use anyhow::{anyhow, Result};
use ring::rand::{SecureRandom, SystemRandom};
use thoth_namer::core::types::Address;

fn main() -> Result<()> {
    let count: usize = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1".to_string())
        .parse()?;

    let rng = SystemRandom::new();
    for _ in 0..count {
        let mut key_hash = [0u8; 20];
        rng.fill(&mut key_hash)
            .map_err(|_| anyhow!("rng failure"))?;
        println!("{}", Address::from_key_hash(&key_hash).to_base58());
    }
    Ok(())
}
