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
use leitner_core::progress_range;

use crate::collection::load_collection;

pub fn print_range(file: String) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    println!("{}", render_range(&collection));
    Ok(())
}

fn render_range(collection: &Collection) -> String {
    match progress_range(&normalize(collection.buckets())) {
        Some(range) => range.to_string(),
        None => "No cards.".to_string(),
    }
}
