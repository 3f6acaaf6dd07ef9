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

//! The Modified-Leitner bucket scheduler.
//!
//! Cards live in numbered buckets. A card in bucket `i` is reviewed every
//! `2^i` days, and moves between buckets depending on how well it was
//! recalled.

use crate::error::SchedulerError;
use crate::types::bucket::BucketArray;
use crate::types::bucket::BucketIndex;
use crate::types::bucket::BucketMap;
use crate::types::bucket::BucketRange;
use crate::types::bucket::BucketSet;
use crate::types::bucket::find_bucket;
use crate::types::card::Flashcard;
use crate::types::difficulty::AnswerDifficulty;

/// Which day counts as the first review day of every bucket.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewRule {
    /// Bucket `i` is due on day `d` iff `d mod 2^i == 0`. Every bucket is due
    /// on day 0.
    ZeroBased,
    /// Bucket `i` is due on day `d` iff `(d + 1) mod 2^i == 0`. Only bucket 0
    /// is due on day 0.
    OneBased,
}

/// The rule used by [`select_for_review`].
pub const REVIEW_RULE: ReviewRule = ReviewRule::ZeroBased;

impl ReviewRule {
    /// Whether cards in `bucket` are due on `day`.
    pub fn is_due(self, bucket: BucketIndex, day: u64) -> bool {
        let d: u64 = match self {
            ReviewRule::ZeroBased => day,
            ReviewRule::OneBased => day.wrapping_add(1),
        };
        // d mod 2^i == 0 without computing 2^i, which overflows for large i.
        d == 0 || d.trailing_zeros() as usize >= bucket
    }
}

/// Convert the sparse bucket map into a dense array indexed by bucket.
///
/// The sets in the result are copies; the map is left untouched.
///
/// # Panics
///
/// The result has one set per index up to the highest key, so a map with a
/// key near `usize::MAX` cannot be allocated. Collections loaded from files
/// never exceed [`MAX_BUCKET`](crate::types::bucket::MAX_BUCKET).
pub fn normalize(buckets: &BucketMap) -> BucketArray {
    let Some(max) = buckets.keys().next_back() else {
        return Vec::new();
    };
    let len: usize = max.saturating_add(1);
    let mut result: BucketArray = vec![BucketSet::new(); len];
    for (index, cards) in buckets {
        result[*index] = cards.clone();
    }
    result
}

/// The range of buckets holding at least one card, or `None` if every bucket
/// is empty.
pub fn progress_range(buckets: &[BucketSet]) -> Option<BucketRange> {
    let mut occupied = buckets
        .iter()
        .enumerate()
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(index, _)| index);
    let min = occupied.next()?;
    let max = occupied.last().unwrap_or(min);
    Some(BucketRange { min, max })
}

/// The cards to review on `day`, following [`REVIEW_RULE`].
pub fn select_for_review(buckets: &[BucketSet], day: i64) -> Result<BucketSet, SchedulerError> {
    select_for_review_with(REVIEW_RULE, buckets, day)
}

/// The cards to review on `day` under an explicit rule.
pub fn select_for_review_with(
    rule: ReviewRule,
    buckets: &[BucketSet],
    day: i64,
) -> Result<BucketSet, SchedulerError> {
    let day: u64 = u64::try_from(day)
        .map_err(|_| SchedulerError::invalid(format!("day must be non-negative, got {day}")))?;
    let due: BucketSet = buckets
        .iter()
        .enumerate()
        .filter(|(index, _)| rule.is_due(*index, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect();
    Ok(due)
}

/// The bucket a card moves to after being answered with `difficulty`.
pub fn next_bucket(
    current: BucketIndex,
    difficulty: AnswerDifficulty,
) -> Result<BucketIndex, SchedulerError> {
    match difficulty {
        AnswerDifficulty::Wrong => Ok(0),
        AnswerDifficulty::Hard => Ok(current.saturating_sub(1)),
        AnswerDifficulty::Easy => current
            .checked_add(1)
            .ok_or_else(|| SchedulerError::invalid(format!("cannot promote past bucket {current}"))),
    }
}

/// Move `card` to the bucket determined by `difficulty`, returning the new
/// bucket map. The input map is not modified.
pub fn apply_review_result(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> Result<BucketMap, SchedulerError> {
    let current: BucketIndex =
        find_bucket(buckets, card).ok_or(SchedulerError::CardNotFound(card.id()))?;
    let destination: BucketIndex = next_bucket(current, difficulty)?;
    let mut updated: BucketMap = buckets.clone();
    let card: Flashcard = updated
        .get_mut(&current)
        .and_then(|cards| cards.take(card))
        .ok_or(SchedulerError::CardNotFound(card.id()))?;
    log::debug!(
        "Card {} answered {difficulty}: bucket {current} -> {destination}",
        card.id()
    );
    updated.entry(destination).or_default().insert(card);
    Ok(updated)
}
