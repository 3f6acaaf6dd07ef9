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

use leitner_core::Collection;
use leitner_core::Fallible;
use leitner_core::normalize;

use crate::collection::CardLabels;
use crate::collection::load_collection;

pub fn print_buckets(file: String) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    print!("{}", render_buckets(&collection));
    Ok(())
}

fn render_buckets(collection: &Collection) -> String {
    let labels = CardLabels::new(collection);
    let buckets = normalize(collection.buckets());
    if buckets.is_empty() {
        return "No cards.\n".to_string();
    }
    let mut out = String::new();
    for (index, cards) in buckets.iter().enumerate() {
        let line: String = if cards.is_empty() {
            "(empty)".to_string()
        } else {
            cards
                .iter()
                .map(|card| labels.label(card))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!("{index}: {line}\n"));
    }
    out
}
