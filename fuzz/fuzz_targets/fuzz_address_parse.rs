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

#![no_main]
#![forbid(unsafe_code)]

use libfuzzer_sys::fuzz_target;
use thoth_namer::core::types::Address;

fuzz_target!(|s: &str| {
    if let Ok(addr) = Address::from_base58(s) {
        // A parsed address must survive the display round trip.
        let again = Address::from_base58(&addr.to_base58()).unwrap();
        assert_eq!(addr, again);
    }
});
