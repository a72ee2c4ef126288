//! Validation, operator lookup and prefix normalization for Iranian
//! mobile phone numbers.
//!
//! ```
//! use iranphonenumber::{Operator, get_phone_details, phone_number_normalizer};
//!
//! let details = get_phone_details("00989121234567").unwrap();
//! assert_eq!(details.operator, Operator::Mci);
//!
//! let normalized = phone_number_normalizer("00989121234567", "+98").unwrap();
//! assert_eq!(normalized, "+989121234567");
//! ```

mod interfaces;
mod phonenumberutil;
mod table_based_lookup;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Compact table builders, kept as macros so the operator tables
/// stay readable as plain rows.
mod macros;


pub use phonenumberutil::{
    DialingPrefix, Operator, OperatorDetails, OperatorTable, SimType, PHONE_NUMBER_UTIL,
    errors::{InvalidFormatError, InvalidPrefixError, PhoneNumberError},
    operator_tables,
    phonenumberutil::{PhoneNumberUtil, Result},
};

/// Returns details of the operator that issued `phone_number`.
///
/// Fails with [`PhoneNumberError::InvalidFormat`] if the number is not valid
/// and with [`PhoneNumberError::InvalidPrefix`] if its operator code is unknown.
pub fn get_phone_details(phone_number: &str) -> Result<OperatorDetails> {
    PHONE_NUMBER_UTIL.get_phone_details(phone_number)
}

/// Returns details of the operator the 3 digit `operator_code` is allocated to.
pub fn get_prefix_details(operator_code: &str) -> std::result::Result<OperatorDetails, InvalidPrefixError> {
    PHONE_NUMBER_UTIL.get_prefix_details(operator_code)
}

/// Returns true if `phone_number` is a known dialing prefix followed by a
/// 10 character local number starting with `9`.
pub fn is_phone_valid(phone_number: &str) -> bool {
    PHONE_NUMBER_UTIL.is_phone_valid(phone_number)
}

/// Like [`is_phone_valid`], and the local number must be ASCII digits only.
pub fn is_phone_valid_strict(phone_number: &str) -> bool {
    PHONE_NUMBER_UTIL.is_phone_valid_strict(phone_number)
}

/// Returns the dialing prefix of `phone_number`, or an empty string.
pub fn get_phone_prefix(phone_number: &str) -> &'static str {
    PHONE_NUMBER_UTIL.get_phone_prefix(phone_number)
}

/// Typed version of [`get_phone_prefix`], see
/// [`PhoneNumberUtil::get_dialing_prefix`].
pub fn get_dialing_prefix(phone_number: &str) -> Option<DialingPrefix> {
    PHONE_NUMBER_UTIL.get_dialing_prefix(phone_number)
}

/// Replaces the dialing prefix of a valid `phone_number` with `new_prefix`.
/// `new_prefix` is not checked.
pub fn phone_number_normalizer(
    phone_number: &str,
    new_prefix: &str,
) -> std::result::Result<String, InvalidFormatError> {
    PHONE_NUMBER_UTIL.phone_number_normalizer(phone_number, new_prefix)
}

/// Replaces the dialing prefix with a known one, see
/// [`PhoneNumberUtil::format_with_prefix`].
pub fn format_with_prefix(
    phone_number: &str,
    prefix: DialingPrefix,
) -> std::result::Result<String, InvalidFormatError> {
    PHONE_NUMBER_UTIL.format_with_prefix(phone_number, prefix)
}

/// Returns the 3 character operator code of a valid `phone_number`.
pub fn get_operator_prefix(phone_number: &str) -> std::result::Result<&str, InvalidFormatError> {
    PHONE_NUMBER_UTIL.get_operator_prefix(phone_number)
}

/// Returns the operator that issued `phone_number`, see
/// [`PhoneNumberUtil::get_operator`].
pub fn get_operator(phone_number: &str) -> Result<Operator> {
    PHONE_NUMBER_UTIL.get_operator(phone_number)
}

/// Converts Unicode digits to ASCII and drops separators, see
/// [`PhoneNumberUtil::normalize_digits`].
pub fn normalize_digits(phone_number: &str) -> String {
    PHONE_NUMBER_UTIL.normalize_digits(phone_number)
}
