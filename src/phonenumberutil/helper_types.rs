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

use super::enums::{Operator, SimType};

/// Static description of the lines issued under one operator code.
///
/// Values are only ever created as compiled-in table data. Lookups hand out
/// clones, so changing a returned value never affects later lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorDetails {
    pub operator: Operator,
    /// Display name of the operator, same as `operator.name()`.
    pub name: &'static str,
    /// Provinces the code was originally allocated to. Empty for codes
    /// allocated nationwide.
    pub provinces: &'static [&'static str],
    pub sim_type: SimType,
    /// Product line, set only where the code is reserved for one.
    pub model: Option<&'static str>,
}

/// All operator codes allocated to a single operator.
#[derive(Debug)]
pub struct OperatorTable {
    pub operator: Operator,
    /// Pairs of 3 digit operator code and its details, in allocation order.
    pub entries: &'static [(&'static str, OperatorDetails)],
}
