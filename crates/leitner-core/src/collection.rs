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

//! The TOML collection format: a list of cards, each with its bucket, and
//! the review history. Cards are referred to by their position in the list.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::apply_review_result;
use crate::types::bucket::BucketIndex;
use crate::types::bucket::BucketMap;
use crate::types::bucket::MAX_BUCKET;
use crate::types::bucket::bucket_index;
use crate::types::bucket::find_bucket;
use crate::types::card::CardId;
use crate::types::card::Flashcard;
use crate::types::difficulty::AnswerDifficulty;
use crate::types::history::History;
use crate::types::history::ReviewRecord;

#[derive(Debug, Default, Deserialize, Serialize)]
struct CollectionFile {
    #[serde(default)]
    cards: Vec<CardEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CardEntry {
    front: String,
    back: String,
    #[serde(default)]
    bucket: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hints: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct HistoryEntry {
    card: usize,
    difficulty: AnswerDifficulty,
}

/// A deck of cards together with its bucket state and review history.
#[derive(Clone, Debug)]
pub struct Collection {
    cards: Vec<Flashcard>,
    buckets: BucketMap,
    history: History,
}

impl Collection {
    /// Parse a collection from TOML. Every card gets a fresh identity.
    pub fn parse(text: &str) -> Fallible<Self> {
        let file: CollectionFile = toml::from_str(text)?;
        let mut cards: Vec<Flashcard> = Vec::with_capacity(file.cards.len());
        let mut buckets = BucketMap::new();
        for (position, entry) in file.cards.into_iter().enumerate() {
            let bucket: BucketIndex = bucket_index(entry.bucket)
                .map_err(|e| ErrorReport::new(format!("card {position}: {e}")))?;
            let mut card = Flashcard::new(entry.front, entry.back).with_hints(entry.hints);
            if let Some(category) = entry.category {
                card = card.with_category(category);
            }
            buckets.entry(bucket).or_default().insert(card.clone());
            cards.push(card);
        }
        let mut history = History::with_capacity(file.history.len());
        for entry in file.history {
            let Some(card) = cards.get(entry.card) else {
                return fail(format!(
                    "history refers to card {}, but the collection has {} cards.",
                    entry.card,
                    cards.len()
                ));
            };
            history.push(ReviewRecord::new(card.clone(), entry.difficulty));
        }
        log::debug!(
            "Parsed collection with {} cards and {} reviews",
            cards.len(),
            history.len()
        );
        Ok(Self {
            cards,
            buckets,
            history,
        })
    }

    /// Render the collection back to TOML, preserving card order.
    pub fn to_toml(&self) -> Fallible<String> {
        let positions: HashMap<CardId, usize> = self
            .cards
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id(), position))
            .collect();
        let mut file = CollectionFile::default();
        for card in &self.cards {
            let Some(bucket) = find_bucket(&self.buckets, card) else {
                return fail(format!("card {} is not in any bucket.", card.id()));
            };
            let Ok(bucket) = i64::try_from(bucket) else {
                return fail(format!(
                    "card {} is in bucket {bucket}, which cannot be written.",
                    card.id()
                ));
            };
            file.cards.push(CardEntry {
                front: card.front().to_string(),
                back: card.back().to_string(),
                bucket,
                category: card.category().map(str::to_string),
                hints: card.hints().to_vec(),
            });
        }
        for record in &self.history {
            let Some(position) = positions.get(&record.card.id()) else {
                return fail(format!(
                    "history refers to card {}, which is not in the collection.",
                    record.card.id()
                ));
            };
            file.history.push(HistoryEntry {
                card: *position,
                difficulty: record.difficulty,
            });
        }
        Ok(toml::to_string(&file)?)
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    pub fn history(&self) -> &[ReviewRecord] {
        &self.history
    }

    /// The card at `position` in the file.
    pub fn card(&self, position: usize) -> Fallible<&Flashcard> {
        match self.cards.get(position) {
            Some(card) => Ok(card),
            None => fail(format!(
                "no card at position {position}: the collection has {} cards.",
                self.cards.len()
            )),
        }
    }

    /// Record an answer for the card at `position`. Returns the new state,
    /// with the card moved and the review appended to the history. Fails if
    /// the card would be promoted past [`MAX_BUCKET`].
    pub fn answer(&self, position: usize, difficulty: AnswerDifficulty) -> Fallible<Self> {
        let card: &Flashcard = self.card(position)?;
        let buckets: BucketMap = apply_review_result(&self.buckets, card, difficulty)?;
        if buckets.range(MAX_BUCKET + 1..).any(|(_, cards)| cards.contains(card)) {
            return fail(format!(
                "card {position} is already in the highest bucket ({MAX_BUCKET})."
            ));
        }
        let mut history: History = self.history.clone();
        history.push(ReviewRecord::new(card.clone(), difficulty));
        Ok(Self {
            cards: self.cards.clone(),
            buckets,
            history,
        })
    }
}
