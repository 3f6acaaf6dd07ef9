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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::bucket::BucketIndex;
use crate::types::bucket::BucketMap;
use crate::types::bucket::find_bucket;
use crate::types::history::ReviewRecord;

/// A summary of learning progress.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressStats {
    /// The number of distinct cards across all buckets.
    pub total_cards: usize,
    /// The number of cards in each bucket.
    pub per_bucket_counts: BTreeMap<BucketIndex, usize>,
    /// The fraction of reviews that were not answered wrong.
    pub accuracy: f64,
    /// The number of reviews of cards that currently live in each bucket.
    pub per_bucket_review_counts: BTreeMap<BucketIndex, usize>,
}

/// Compute progress statistics. Reviews of cards that are in no bucket count
/// towards accuracy, but not towards any bucket's review count.
pub fn progress_stats(buckets: &BucketMap, history: &[ReviewRecord]) -> ProgressStats {
    let per_bucket_counts: BTreeMap<BucketIndex, usize> = buckets
        .iter()
        .map(|(index, cards)| (*index, cards.len()))
        .collect();
    let total_cards: usize = per_bucket_counts.values().sum();

    let correct: usize = history
        .iter()
        .filter(|record| record.difficulty.is_correct())
        .count();
    let accuracy: f64 = if history.is_empty() {
        0.0
    } else {
        correct as f64 / history.len() as f64
    };

    let mut per_bucket_review_counts: BTreeMap<BucketIndex, usize> =
        buckets.keys().map(|index| (*index, 0)).collect();
    for record in history {
        if let Some(index) = find_bucket(buckets, &record.card) {
            *per_bucket_review_counts.entry(index).or_default() += 1;
        }
    }

    ProgressStats {
        total_cards,
        per_bucket_counts,
        accuracy,
        per_bucket_review_counts,
    }
}
