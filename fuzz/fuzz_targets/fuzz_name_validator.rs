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
use thoth_namer::core::registry::name::{validate_name, NAME_MAX_LEN, NAME_MIN_LEN};

fuzz_target!(|name: &str| {
    let ok = validate_name(name);
    if ok {
        assert!(name.len() >= NAME_MIN_LEN && name.len() <= NAME_MAX_LEN);
        assert!(name
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-')));
        assert!(!name.starts_with('-') && !name.ends_with('-'));
    }
});
