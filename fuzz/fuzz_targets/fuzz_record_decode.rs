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
use thoth_namer::core::registry::state::NameRecord;
use thoth_namer::core::types::{decode_canonical_limited, encode_canonical};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic, and anything that decodes must
    // re-encode to the same bytes (canonical form).
    if let Ok(record) = decode_canonical_limited::<NameRecord>(data, 1024) {
        let bytes = encode_canonical(&record).unwrap();
        assert_eq!(bytes, data);
    }
});
