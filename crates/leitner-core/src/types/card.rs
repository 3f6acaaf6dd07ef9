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

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering as AtomicOrdering;

/// Source of fresh card identities.
static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(0);

/// The identity of a flashcard. Two cards with the same text have different
/// identities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CardId(u64);

impl CardId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate an identity that no other card created in this process has.
    pub fn fresh() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable flashcard.
///
/// Equality, ordering, and hashing only look at the card's identity, so sets
/// and maps of cards behave like collections of distinct objects.
#[derive(Clone, Debug)]
pub struct Flashcard {
    id: CardId,
    front: String,
    back: String,
    category: Option<String>,
    hints: Vec<String>,
}

impl Flashcard {
    /// Create a card with a fresh identity.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: CardId::fresh(),
            front: front.into(),
            back: back.into(),
            category: None,
            hints: Vec::new(),
        }
    }

    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..self
        }
    }

    pub fn with_hints(self, hints: Vec<String>) -> Self {
        Self { hints, ..self }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Flashcard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flashcard {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
