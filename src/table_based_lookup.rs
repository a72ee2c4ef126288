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

use log::trace;

use crate::{
    interfaces::OperatorLookupApi,
    phonenumberutil::helper_types::{OperatorDetails, OperatorTable},
};

impl OperatorLookupApi for OperatorTable {
    fn find_details(&self, operator_code: &str) -> Option<&OperatorDetails> {
        // Tables hold a few dozen rows at most, linear scan is enough.
        let found = self
            .entries
            .iter()
            .find(|(code, _)| *code == operator_code)
            .map(|(_, details)| details);
        if found.is_none() {
            trace!("Operator code '{operator_code}' is not allocated to {}", self.operator);
        }
        found
    }

    fn operator_codes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(code, _)| *code)
    }
}
