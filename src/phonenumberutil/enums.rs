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

use std::fmt;

use strum::EnumIter;

/// Dialing prefixes accepted in front of an Iranian mobile number.
///
/// Variants are declared in resolution order: when a number is matched
/// against the prefixes, the first one it starts with wins. `0098` must be
/// tried before `0`, otherwise every international number would resolve
/// to the trunk prefix.
///
/// For the number `09121234567` the forms are:
/// - **PlusCountryCode**: `+989121234567`
/// - **InternationalCountryCode**: `00989121234567`
/// - **CountryCode**: `989121234567`
/// - **Trunk**: `09121234567`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialingPrefix {
    /// `+98`, the E.164 form.
    PlusCountryCode,
    /// `0098`, international access code followed by the country code.
    InternationalCountryCode,
    /// `98`, country code without any access code.
    CountryCode,
    /// `0`, the national trunk prefix.
    Trunk,
}

impl DialingPrefix {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DialingPrefix::PlusCountryCode => "+98",
            DialingPrefix::InternationalCountryCode => "0098",
            DialingPrefix::CountryCode => "98",
            DialingPrefix::Trunk => "0",
        }
    }
}

impl AsRef<str> for DialingPrefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DialingPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Iranian mobile network operators.
///
/// The declaration order is the order in which operator tables are
/// scanned, so if a code were ever allocated to two operators the one
/// declared first would be reported.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Mobile Communication Company of Iran (Hamrah-e Avval).
    Mci,
    /// Taliya, a former MCI subsidiary; its numbers are now served by MCI.
    Taliya,
    /// RighTel, the third licensed 3G/4G operator.
    RighTel,
    /// MTN Irancell.
    Irancell,
    /// Shatel Mobile, an MVNO hosted on the Irancell network.
    ShatelMobile,
}

impl Operator {
    /// Commonly used display name of the operator.
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::Mci => "MCI",
            Operator::Taliya => "Taliya",
            Operator::RighTel => "RighTel",
            Operator::Irancell => "Irancell",
            Operator::ShatelMobile => "ShatelMobile",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Billing model of the SIM cards issued under an operator code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimType {
    /// **Post-paid** ("daemi") lines only.
    Permanent,
    /// **Pre-paid** ("etebari") lines only.
    Credit,
    /// The code is used for both post-paid and pre-paid lines.
    Both,
}
