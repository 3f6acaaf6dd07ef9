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

use crate::types::card::Flashcard;
use crate::types::difficulty::AnswerDifficulty;

/// One review trial: the card that was shown and how well it was recalled.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRecord {
    pub card: Flashcard,
    pub difficulty: AnswerDifficulty,
}

impl ReviewRecord {
    pub fn new(card: Flashcard, difficulty: AnswerDifficulty) -> Self {
        Self { card, difficulty }
    }
}

/// Review trials in the order they happened. Only ever appended to.
pub type History = Vec<ReviewRecord>;
