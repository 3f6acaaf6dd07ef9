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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// How well the user recalled a card in a review trial.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnswerDifficulty {
    Wrong,
    Hard,
    Easy,
}

impl AnswerDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerDifficulty::Wrong => "wrong",
            AnswerDifficulty::Hard => "hard",
            AnswerDifficulty::Easy => "easy",
        }
    }

    /// Whether the answer counts towards accuracy.
    pub fn is_correct(&self) -> bool {
        !matches!(self, AnswerDifficulty::Wrong)
    }
}

impl Display for AnswerDifficulty {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for AnswerDifficulty {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "wrong" => Ok(AnswerDifficulty::Wrong),
            "hard" => Ok(AnswerDifficulty::Hard),
            "easy" => Ok(AnswerDifficulty::Easy),
            _ => fail(format!("invalid difficulty string: {value}")),
        }
    }
}

impl From<AnswerDifficulty> for String {
    fn from(difficulty: AnswerDifficulty) -> String {
        difficulty.as_str().to_string()
    }
}
