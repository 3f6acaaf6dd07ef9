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
use std::fs::canonicalize;
use std::fs::write;
use std::path::Path;

use clap::ValueEnum;
use leitner_core::AnswerDifficulty;
use leitner_core::Collection;
use leitner_core::Fallible;
use leitner_core::fail;

use crate::collection::load_collection;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum Answer {
    /// The card was not recalled. It goes back to bucket 0.
    Wrong,
    /// The card was recalled with effort. It moves down one bucket.
    Hard,
    /// The card was recalled easily. It moves up one bucket.
    Easy,
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", AnswerDifficulty::from(*self))
    }
}

impl From<Answer> for AnswerDifficulty {
    fn from(answer: Answer) -> AnswerDifficulty {
        match answer {
            Answer::Wrong => AnswerDifficulty::Wrong,
            Answer::Hard => AnswerDifficulty::Hard,
            Answer::Easy => AnswerDifficulty::Easy,
        }
    }
}

pub fn answer_card(
    file: String,
    card: usize,
    answer: Answer,
    output: Option<String>,
) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    let updated: Collection = collection.answer(card, answer.into())?;
    let toml: String = updated.to_toml()?;
    match output {
        Some(output) => {
            if same_file(&file, &output)? {
                return fail("refusing to overwrite the input collection.");
            }
            write(&output, toml)?;
            log::debug!("Wrote updated collection to {output}");
        }
        None => {
            print!("{toml}");
        }
    }
    Ok(())
}

fn same_file(a: &str, b: &str) -> Fallible<bool> {
    if !Path::new(b).exists() {
        return Ok(false);
    }
    Ok(canonicalize(a)? == canonicalize(b)?)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use leitner_core::types::bucket::find_bucket;

    use super::*;
    use crate::collection::helper::SAMPLE;
    use crate::collection::helper::write_sample;

    #[test]
    fn test_answer_to_output_file() -> Fallible<()> {
        let (dir, path) = write_sample()?;
        let output = dir.path().join("next.toml").display().to_string();
        answer_card(path.clone(), 2, Answer::Easy, Some(output.clone()))?;

        let updated = load_collection(&output)?;
        let card = &updated.cards()[2];
        assert_eq!(find_bucket(updated.buckets(), card), Some(4));
        assert_eq!(updated.history().len(), 3);
        assert_eq!(updated.history()[2].difficulty, AnswerDifficulty::Easy);

        // The input file is untouched.
        assert_eq!(read_to_string(&path)?, SAMPLE);
        Ok(())
    }

    #[test]
    fn test_refuse_to_overwrite_input() -> Fallible<()> {
        let (_dir, path) = write_sample()?;
        let Err(err) = answer_card(path.clone(), 0, Answer::Wrong, Some(path.clone())) else {
            panic!("the input collection was overwritten");
        };
        assert_eq!(
            err.to_string(),
            "error: refusing to overwrite the input collection."
        );
        assert_eq!(read_to_string(&path)?, SAMPLE);
        Ok(())
    }

    #[test]
    fn test_answer_unknown_position() -> Fallible<()> {
        let (_dir, path) = write_sample()?;
        assert!(answer_card(path, 3, Answer::Hard, None).is_err());
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Answer::Hard.to_string(), "hard");
    }
}
