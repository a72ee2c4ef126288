mod helper_constants;
mod phone_number_regexps;
pub mod errors;
pub mod enums;
pub mod helper_types;
pub mod operator_tables;
pub mod phonenumberutil;

use std::sync::LazyLock;

pub use enums::{DialingPrefix, Operator, SimType};
pub use helper_types::{OperatorDetails, OperatorTable};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
