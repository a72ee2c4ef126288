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

use regex::Regex;

use super::helper_constants::{ASCII_DIGITS, LOCAL_NUMBER_LENGTH, PLUS_CHARS, VALID_PUNCTUATION};

pub(super) struct PhoneNumberRegExps {
    /// Runs of visual separators users put between digit groups, such as
    /// `0912 123-45 67` or `(0912) 1234567`.
    pub separator_pattern: Regex,

    /// Any of the plus characters, ASCII `+` or full-width `＋`.
    pub plus_chars_pattern: Regex,

    /// A local number made of ASCII digits only: `9` followed by nine more
    /// digits. `\d` is not used since it matches any Unicode decimal digit.
    pub local_number_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            plus_chars_pattern: Regex::new(&format!("[{}]", PLUS_CHARS)).unwrap(),
            local_number_pattern: Regex::new(&format!(
                "9[{}]{{{}}}",
                ASCII_DIGITS,
                LOCAL_NUMBER_LENGTH - 1
            ))
            .unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExps;
    use crate::regex_util::RegexFullMatch;

    #[test]
    fn patterns_compile() {
        let reg_exps = PhoneNumberRegExps::new();
        assert!(reg_exps.local_number_pattern.full_match("9121234567"));
        assert!(!reg_exps.local_number_pattern.full_match("912123456"));
        assert!(!reg_exps.local_number_pattern.full_match("91212345678"));
        assert!(!reg_exps.local_number_pattern.full_match("912123456x"));
        // Persian digits are decimal but not ASCII
        assert!(!reg_exps.local_number_pattern.full_match("9۱۲۱۲۳۴۵۶۷"));

        assert_eq!(
            reg_exps.separator_pattern.replace_all("(0912) 123-45.67", ""),
            "09121234567"
        );
        assert_eq!(
            reg_exps.separator_pattern.replace_all("[0912]/123~4567", ""),
            "09121234567"
        );
        assert_eq!(
            reg_exps.separator_pattern.replace_all("\u{200F}0912\u{200E}1234567", ""),
            "09121234567"
        );
        assert_eq!(reg_exps.plus_chars_pattern.replace_all("\u{FF0B}98", "+"), "+98");
    }
}
