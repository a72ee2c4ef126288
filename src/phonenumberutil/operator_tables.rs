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

//! Compiled-in operator code allocations.

use crate::macros::operator_details;

use super::{
    enums::{Operator, SimType},
    helper_types::OperatorTable,
};

pub static MCI: OperatorTable = OperatorTable {
    operator: Operator::Mci,
    entries: &[
        ("910", operator_details!(Operator::Mci, SimType::Both)),
        ("911", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Mazandaran", "Golestan", "Gilan"],
        )),
        ("912", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Tehran", "Alborz", "Zanjan", "Semnan", "Qazvin", "Qom", "Markazi"],
        )),
        ("913", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Isfahan", "Yazd", "Chaharmahal and Bakhtiari", "Kerman"],
        )),
        ("914", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["East Azerbaijan", "West Azerbaijan", "Ardabil", "Isfahan"],
        )),
        ("915", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Razavi Khorasan", "North Khorasan", "South Khorasan", "Sistan and Baluchestan"],
        )),
        ("916", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Khuzestan", "Lorestan", "Fars", "Isfahan"],
        )),
        ("917", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Fars", "Bushehr", "Kohgiluyeh and Boyer-Ahmad", "Hormozgan"],
        )),
        ("918", operator_details!(
            Operator::Mci, SimType::Permanent,
            provinces = ["Kermanshah", "Kurdistan", "Ilam", "Hamadan"],
        )),
        ("919", operator_details!(
            Operator::Mci, SimType::Credit,
            provinces = ["Tehran", "Semnan", "Qom", "Alborz"],
        )),
        ("990", operator_details!(Operator::Mci, SimType::Both)),
        ("991", operator_details!(Operator::Mci, SimType::Both)),
        ("992", operator_details!(Operator::Mci, SimType::Credit)),
        ("993", operator_details!(Operator::Mci, SimType::Credit)),
        ("994", operator_details!(Operator::Mci, SimType::Credit)),
    ],
};

pub static TALIYA: OperatorTable = OperatorTable {
    operator: Operator::Taliya,
    entries: &[
        ("932", operator_details!(Operator::Taliya, SimType::Credit)),
    ],
};

pub static RIGHTEL: OperatorTable = OperatorTable {
    operator: Operator::RighTel,
    entries: &[
        ("920", operator_details!(Operator::RighTel, SimType::Permanent)),
        ("921", operator_details!(Operator::RighTel, SimType::Credit)),
        ("922", operator_details!(Operator::RighTel, SimType::Credit)),
        ("923", operator_details!(Operator::RighTel, SimType::Credit)),
    ],
};

pub static IRANCELL: OperatorTable = OperatorTable {
    operator: Operator::Irancell,
    entries: &[
        ("900", operator_details!(Operator::Irancell, SimType::Both)),
        ("901", operator_details!(Operator::Irancell, SimType::Both)),
        ("902", operator_details!(Operator::Irancell, SimType::Both)),
        ("903", operator_details!(Operator::Irancell, SimType::Both)),
        ("904", operator_details!(Operator::Irancell, SimType::Credit, model = "Kids")),
        ("905", operator_details!(Operator::Irancell, SimType::Both)),
        ("930", operator_details!(Operator::Irancell, SimType::Both)),
        ("933", operator_details!(Operator::Irancell, SimType::Both)),
        ("935", operator_details!(Operator::Irancell, SimType::Both)),
        ("936", operator_details!(Operator::Irancell, SimType::Both)),
        ("937", operator_details!(Operator::Irancell, SimType::Both)),
        ("938", operator_details!(Operator::Irancell, SimType::Both)),
        ("939", operator_details!(Operator::Irancell, SimType::Both)),
        ("941", operator_details!(Operator::Irancell, SimType::Both, model = "TD-LTE")),
    ],
};

pub static SHATEL_MOBILE: OperatorTable = OperatorTable {
    operator: Operator::ShatelMobile,
    entries: &[
        ("998", operator_details!(Operator::ShatelMobile, SimType::Credit)),
    ],
};

/// Operator tables in the order they are scanned during lookup.
pub static OPERATOR_TABLES: &[&OperatorTable] = &[
    &MCI,
    &TALIYA,
    &RIGHTEL,
    &IRANCELL,
    &SHATEL_MOBILE,
];
