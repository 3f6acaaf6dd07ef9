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

//! leitner-core: Core library for the leitner spaced repetition scheduler.
//!
//! This library provides:
//! - Flashcards with identity semantics
//! - The Modified-Leitner bucket scheduler
//! - Hints and progress statistics
//! - The TOML collection format

pub mod collection;
pub mod error;
pub mod hint;
pub mod scheduler;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use collection::Collection;
pub use error::{ErrorReport, Fallible, SchedulerError, fail};
pub use hint::hint;
pub use scheduler::{
    REVIEW_RULE, ReviewRule, apply_review_result, normalize, progress_range, select_for_review,
    select_for_review_with,
};
pub use stats::{ProgressStats, progress_stats};
pub use types::bucket::{BucketArray, BucketIndex, BucketMap, BucketRange, BucketSet};
pub use types::card::{CardId, Flashcard};
pub use types::difficulty::AnswerDifficulty;
pub use types::history::{History, ReviewRecord};
