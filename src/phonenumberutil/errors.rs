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

use thiserror::Error;

/// Possible reasons why a phone number could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PhoneNumberError {
    /// The number is not a dialing prefix followed by a 10 digit local
    /// number starting with `9`.
    #[error("{0}")]
    InvalidFormat(#[from] InvalidFormatError),
    /// The operator code of the number is not allocated to any known operator.
    #[error("{0}")]
    InvalidPrefix(#[from] InvalidPrefixError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Invalid format")]
pub struct InvalidFormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Invalid prefix")]
pub struct InvalidPrefixError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_kept_through_conversion() {
        let err: PhoneNumberError = InvalidFormatError.into();
        assert_eq!(err.to_string(), "Invalid format");
        assert!(matches!(err, PhoneNumberError::InvalidFormat(_)));

        let err: PhoneNumberError = InvalidPrefixError.into();
        assert_eq!(err.to_string(), "Invalid prefix");
        assert!(matches!(err, PhoneNumberError::InvalidPrefix(_)));
    }
}
