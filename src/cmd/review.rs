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

use clap::ValueEnum;
use leitner_core::BucketSet;
use leitner_core::Collection;
use leitner_core::Fallible;
use leitner_core::ReviewRule;
use leitner_core::normalize;
use leitner_core::select_for_review_with;

use crate::collection::CardLabels;
use crate::collection::load_collection;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum DayRule {
    /// Every bucket is due on day 0.
    ZeroBased,
    /// Only bucket 0 is due on day 0; bucket `i` is first due on day `2^i - 1`.
    OneBased,
}

impl Display for DayRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayRule::ZeroBased => write!(f, "zero-based"),
            DayRule::OneBased => write!(f, "one-based"),
        }
    }
}

impl From<DayRule> for ReviewRule {
    fn from(rule: DayRule) -> ReviewRule {
        match rule {
            DayRule::ZeroBased => ReviewRule::ZeroBased,
            DayRule::OneBased => ReviewRule::OneBased,
        }
    }
}

pub fn print_review(file: String, day: i64, rule: DayRule) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    print!("{}", render_review(&collection, day, rule)?);
    Ok(())
}

fn render_review(collection: &Collection, day: i64, rule: DayRule) -> Fallible<String> {
    let due: BucketSet = select_for_review_with(rule.into(), &normalize(collection.buckets()), day)?;
    log::debug!("{} cards due on day {day} ({rule})", due.len());
    if due.is_empty() {
        return Ok(format!("No cards due on day {day}.\n"));
    }
    let labels = CardLabels::new(collection);
    let mut out = String::new();
    for card in &due {
        out.push_str(&labels.label(card));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::helper::SAMPLE;

    const FRANCE: &str = "[0] What is the capital of France?\n";
    const BONJOUR: &str = "[1] Bonjour\n";
    const OXYGEN: &str = "[2] Photosynthesis produces what gas?\n";

    #[test]
    fn test_zero_based_review() -> Fallible<()> {
        let collection = Collection::parse(SAMPLE)?;
        let rule = DayRule::ZeroBased;
        assert_eq!(
            render_review(&collection, 0, rule)?,
            format!("{FRANCE}{BONJOUR}{OXYGEN}")
        );
        assert_eq!(render_review(&collection, 1, rule)?, FRANCE);
        assert_eq!(
            render_review(&collection, 2, rule)?,
            format!("{FRANCE}{BONJOUR}")
        );
        assert_eq!(
            render_review(&collection, 8, rule)?,
            format!("{FRANCE}{BONJOUR}{OXYGEN}")
        );
        Ok(())
    }

    #[test]
    fn test_one_based_review() -> Fallible<()> {
        let collection = Collection::parse(SAMPLE)?;
        let rule = DayRule::OneBased;
        assert_eq!(render_review(&collection, 0, rule)?, FRANCE);
        assert_eq!(
            render_review(&collection, 7, rule)?,
            format!("{FRANCE}{BONJOUR}{OXYGEN}")
        );
        Ok(())
    }

    #[test]
    fn test_nothing_due() -> Fallible<()> {
        let text = "[[cards]]\nfront = \"a\"\nback = \"b\"\nbucket = 1\n";
        let collection = Collection::parse(text)?;
        assert_eq!(
            render_review(&collection, 3, DayRule::ZeroBased)?,
            "No cards due on day 3.\n"
        );
        Ok(())
    }

    #[test]
    fn test_negative_day() -> Fallible<()> {
        let collection = Collection::parse(SAMPLE)?;
        let Err(err) = render_review(&collection, -2, DayRule::ZeroBased) else {
            panic!("a negative day was accepted");
        };
        assert_eq!(
            err.to_string(),
            "error: invalid argument: day must be non-negative, got -2"
        );
        Ok(())
    }
}
