// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::SchedulerError;
use crate::types::card::Flashcard;

/// Appended to the revealed part of the prompt.
pub const HINT_ELLIPSIS: &str = "...";

/// The first word of the card's prompt, followed by an ellipsis.
pub fn hint(card: &Flashcard) -> Result<String, SchedulerError> {
    match card.front().split_whitespace().next() {
        Some(word) => Ok(format!("{word}{HINT_ELLIPSIS}")),
        None => Err(SchedulerError::invalid(format!(
            "card {} has an empty prompt",
            card.id()
        ))),
    }
}
