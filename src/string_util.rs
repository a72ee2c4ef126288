// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Strips the first prefix from `prefixes` that `s` starts with. Returns
/// the matched prefix together with the rest of the string.
///
/// Order of `prefixes` matters: `"0"` given before `"0098"` would swallow
/// every string starting with `"0098"`.
pub fn strip_first_prefix<'a, T, I>(s: &'a str, prefixes: I) -> Option<(T, &'a str)>
where
    T: AsRef<str>,
    I: IntoIterator<Item = T>,
{
    prefixes.into_iter().find_map(|prefix| {
        let rest = s.strip_prefix(prefix.as_ref())?;
        Some((prefix, rest))
    })
}

/// Returns first `len` bytes of `s`, or `None` if `s` is shorter or the
/// split point is not a char boundary.
pub fn leading_slice(s: &str, len: usize) -> Option<&str> {
    s.get(..len)
}
