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

//! Lexical name validation. Pure; no state access.

/// Minimum accepted name length.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum accepted name length.
pub const NAME_MAX_LEN: usize = 32;

/// Whether `name` is lexically acceptable for registration.
///
/// Accepted names are 3..=32 characters from `[a-z0-9-]` and neither start
/// nor end with a hyphen. Byte length equals character length over this
/// alphabet, so the bounds are checked on bytes.
pub fn validate_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.len() < NAME_MIN_LEN || name.len() > NAME_MAX_LEN {
        return false;
    }
    if !name
        .bytes()
        .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'))
    {
        return false;
    }
    if name.starts_with('-') || name.ends_with('-') {
        return false;
    }
    true
}
