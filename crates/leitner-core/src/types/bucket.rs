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
use std::collections::BTreeSet;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SchedulerError;
use crate::types::card::Flashcard;

/// A bucket's position on the mastery scale. Zero is the least mastered.
pub type BucketIndex = usize;

/// The highest bucket a collection file may hold. Every bucket from 64 up is
/// already reviewed only on day 0, and the dense view allocates one set per
/// index.
pub const MAX_BUCKET: BucketIndex = 1024;

/// The cards in a single bucket.
pub type BucketSet = BTreeSet<Flashcard>;

/// The canonical bucket state: only buckets that were created are present.
pub type BucketMap = BTreeMap<BucketIndex, BucketSet>;

/// The dense view of a bucket map: every index up to the highest bucket is
/// present, possibly as an empty set.
pub type BucketArray = Vec<BucketSet>;

/// The lowest and highest non-empty buckets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BucketRange {
    pub min: BucketIndex,
    pub max: BucketIndex,
}

impl Display for BucketRange {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Validate a signed bucket index coming from outside the crate.
pub fn bucket_index(value: i64) -> Result<BucketIndex, SchedulerError> {
    let index: BucketIndex = BucketIndex::try_from(value).map_err(|_| {
        SchedulerError::invalid(format!("bucket index must be non-negative, got {value}"))
    })?;
    if index > MAX_BUCKET {
        return Err(SchedulerError::invalid(format!(
            "bucket index must be at most {MAX_BUCKET}, got {value}"
        )));
    }
    Ok(index)
}

/// Find the bucket a card lives in.
pub fn find_bucket(buckets: &BucketMap, card: &Flashcard) -> Option<BucketIndex> {
    buckets
        .iter()
        .find(|(_, cards)| cards.contains(card))
        .map(|(index, _)| *index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index() {
        assert_eq!(bucket_index(0), Ok(0));
        assert_eq!(bucket_index(5), Ok(5));
        assert!(matches!(
            bucket_index(-1),
            Err(SchedulerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bucket_index_upper_bound() {
        assert_eq!(bucket_index(MAX_BUCKET as i64), Ok(MAX_BUCKET));
        assert!(matches!(
            bucket_index(MAX_BUCKET as i64 + 1),
            Err(SchedulerError::InvalidArgument(_))
        ));
        assert!(matches!(
            bucket_index(i64::MAX),
            Err(SchedulerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_find_bucket() {
        let a = Flashcard::new("a", "A");
        let b = Flashcard::new("b", "B");
        let stranger = Flashcard::new("a", "A");
        let buckets: BucketMap = BTreeMap::from([
            (0, BTreeSet::from([a.clone()])),
            (3, BTreeSet::from([b.clone()])),
        ]);
        assert_eq!(find_bucket(&buckets, &a), Some(0));
        assert_eq!(find_bucket(&buckets, &b), Some(3));
        assert_eq!(find_bucket(&buckets, &stranger), None);
    }

    #[test]
    fn test_range_display() {
        let range = BucketRange { min: 1, max: 3 };
        assert_eq!(range.to_string(), "1..3");
    }
}
