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

use std::collections::HashMap;

use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    enums::{DialingPrefix, Operator},
    errors::{InvalidFormatError, InvalidPrefixError, PhoneNumberError},
    helper_constants::{LOCAL_NUMBER_LENGTH, MOBILE_LEADING_DIGIT, OPERATOR_CODE_LENGTH, PLUS_SIGN},
    helper_types::{OperatorDetails, OperatorTable},
    operator_tables::OPERATOR_TABLES,
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::{
    interfaces::OperatorLookupApi,
    regex_util::RegexFullMatch,
    string_util::{leading_slice, strip_first_prefix},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneNumberError>;

pub struct PhoneNumberUtil {
    /// Operator tables in scan order. When an operator code is present in
    /// more than one table, the earlier table wins.
    operator_tables: &'static [&'static OperatorTable],

    /// Helper holding the regular expressions used by the strict validator
    /// and the input normalizer.
    reg_exps: PhoneNumberRegExps,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        Self::new_for_tables(OPERATOR_TABLES)
    }

    /// Creates an engine over the given operator tables instead of the
    /// compiled-in ones. Tables are scanned in slice order.
    pub fn new_for_tables(operator_tables: &'static [&'static OperatorTable]) -> Self {
        let instance = Self {
            operator_tables,
            reg_exps: PhoneNumberRegExps::new(),
        };
        for (code, operators) in instance.collect_operators_by_code() {
            if operators.len() > 1 {
                warn!(
                    "Operator code {} is allocated to several operators {:?}, {} will be reported",
                    code, operators, operators[0]
                );
            }
        }
        instance
    }

    /// Maps every operator code to the operators it is allocated to,
    /// keeping scan order inside each list.
    fn collect_operators_by_code(&self) -> HashMap<&'static str, Vec<Operator>> {
        let mut operators_by_code = HashMap::<&'static str, Vec<Operator>>::new();
        for table in self.operator_tables {
            for code in table.operator_codes() {
                operators_by_code.entry(code).or_default().push(table.operator);
            }
        }
        operators_by_code
    }

    /// Returns operator codes present in more than one operator table,
    /// sorted. Empty for consistent data.
    pub fn colliding_operator_codes(&self) -> Vec<&'static str> {
        let mut codes = self
            .collect_operators_by_code()
            .into_iter()
            .filter(|(_, operators)| operators.len() > 1)
            .map(|(code, _)| code)
            .collect::<Vec<_>>();
        codes.sort_unstable();
        codes
    }

    /// Returns every operator code allocated to `operator`, in allocation order.
    pub fn operator_prefixes(&self, operator: Operator) -> impl Iterator<Item = &'static str> + '_ {
        self.operator_tables
            .iter()
            .filter(move |table| table.operator == operator)
            .flat_map(|table| table.operator_codes())
    }

    /// Resolves the dialing prefix of `phone_number` and returns it together
    /// with the rest of the number.
    fn split_dialing_prefix<'a>(&self, phone_number: &'a str) -> Option<(DialingPrefix, &'a str)> {
        let found = strip_first_prefix(phone_number, DialingPrefix::iter());
        if found.is_none() {
            trace!("No dialing prefix found in '{}'", phone_number);
        }
        found
    }

    /// Returns the dialing prefix `phone_number` starts with, e.g. `+98`,
    /// `0098`, `98` or `0`. An empty string means no known prefix matched,
    /// this is not an error by itself.
    pub fn get_phone_prefix(&self, phone_number: &str) -> &'static str {
        self.get_dialing_prefix(phone_number)
            .map(|prefix| prefix.as_str())
            .unwrap_or("")
    }

    /// Typed version of [`Self::get_phone_prefix`].
    pub fn get_dialing_prefix(&self, phone_number: &str) -> Option<DialingPrefix> {
        self.split_dialing_prefix(phone_number)
            .map(|(prefix, _)| prefix)
    }

    /// Returns the local number (10 characters starting with `9`) if
    /// `phone_number` is a known dialing prefix followed by one.
    fn local_number<'a>(&self, phone_number: &'a str) -> Option<&'a str> {
        let (_, local_number) = self.split_dialing_prefix(phone_number)?;
        if local_number.len() != LOCAL_NUMBER_LENGTH {
            trace!(
                "Local number '{}' has length {}, expected {}",
                local_number, local_number.len(), LOCAL_NUMBER_LENGTH
            );
            return None;
        }
        // Guarded access, the remainder may be empty for inputs like "+98".
        if local_number.as_bytes().first() != Some(&MOBILE_LEADING_DIGIT) {
            trace!("Local number '{}' does not start with 9", local_number);
            return None;
        }
        Some(local_number)
    }

    /// Checks that `phone_number` is a known dialing prefix followed by
    /// exactly 10 characters, the first of which is `9`.
    ///
    /// The remaining characters are not checked to be digits, use
    /// [`Self::is_phone_valid_strict`] for that.
    pub fn is_phone_valid(&self, phone_number: &str) -> bool {
        self.local_number(phone_number).is_some()
    }

    /// Same as [`Self::is_phone_valid`], but also requires the local number
    /// to consist of ASCII digits only.
    pub fn is_phone_valid_strict(&self, phone_number: &str) -> bool {
        self.local_number(phone_number)
            .is_some_and(|local_number| self.reg_exps.local_number_pattern.full_match(local_number))
    }

    /// Returns the 3 character operator code following the dialing prefix,
    /// e.g. `912` for `+989121234567`.
    pub fn get_operator_prefix<'a>(
        &self,
        phone_number: &'a str,
    ) -> std::result::Result<&'a str, InvalidFormatError> {
        if !self.is_phone_valid(phone_number) {
            return Err(InvalidFormatError);
        }
        let (_, local_number) = self
            .split_dialing_prefix(phone_number)
            .ok_or(InvalidFormatError)?;
        leading_slice(local_number, OPERATOR_CODE_LENGTH).ok_or(InvalidFormatError)
    }

    /// Looks `operator_code` up in the operator tables, in scan order.
    /// The returned value is a copy of the table entry.
    pub fn get_prefix_details(
        &self,
        operator_code: &str,
    ) -> std::result::Result<OperatorDetails, InvalidPrefixError> {
        self.operator_tables
            .iter()
            .find_map(|table| table.find_details(operator_code))
            .cloned()
            .ok_or_else(|| {
                trace!("Operator code '{}' is not allocated", operator_code);
                InvalidPrefixError
            })
    }

    /// Validates `phone_number` and returns details of the operator it
    /// was issued by.
    pub fn get_phone_details(&self, phone_number: &str) -> Result<OperatorDetails> {
        if !self.is_phone_valid(phone_number) {
            return Err(InvalidFormatError.into());
        }
        let operator_code = self.get_operator_prefix(phone_number)?;
        Ok(self.get_prefix_details(operator_code)?)
    }

    /// Returns the operator that issued `phone_number`.
    pub fn get_operator(&self, phone_number: &str) -> Result<Operator> {
        self.get_phone_details(phone_number)
            .map(|details| details.operator)
    }

    /// Replaces the dialing prefix of `phone_number` with `new_prefix`.
    ///
    /// `new_prefix` is used as is, so the result is not guaranteed to be a
    /// valid phone number. Use [`Self::format_with_prefix`] to stay within
    /// known prefixes.
    pub fn phone_number_normalizer(
        &self,
        phone_number: &str,
        new_prefix: &str,
    ) -> std::result::Result<String, InvalidFormatError> {
        let local_number = self.local_number(phone_number).ok_or(InvalidFormatError)?;
        Ok(fast_cat::concat_str!(new_prefix, local_number))
    }

    /// Replaces the dialing prefix of `phone_number` with one of the known
    /// prefixes, so the result always passes validation again.
    pub fn format_with_prefix(
        &self,
        phone_number: &str,
        prefix: DialingPrefix,
    ) -> std::result::Result<String, InvalidFormatError> {
        self.phone_number_normalizer(phone_number, prefix.as_str())
    }

    /// Converts user input into the form expected by the rest of the API:
    /// every Unicode decimal digit (Persian, Arabic-Indic, full width...)
    /// becomes its ASCII counterpart, full-width plus becomes `+` and
    /// visual separators (direction marks included) are dropped.
    ///
    /// `"۰۹۱۲ ۱۲۳-۴۵۶۷"` becomes `"09121234567"`.
    pub fn normalize_digits(&self, phone_number: &str) -> String {
        let ascii_digits = dec_from_char::normalize_decimals(phone_number);
        let without_separators = self.reg_exps
            .separator_pattern
            .replace_all(&ascii_digits, "");
        self.reg_exps
            .plus_chars_pattern
            .replace_all(&without_separators, PLUS_SIGN)
            .into_owned()
    }
}
