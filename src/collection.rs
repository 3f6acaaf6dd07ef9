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

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use leitner_core::Collection;
use leitner_core::Fallible;
use leitner_core::fail;
use leitner_core::types::card::CardId;
use leitner_core::types::card::Flashcard;

/// Read and parse a collection file.
pub fn load_collection(path: &str) -> Fallible<Collection> {
    let path: PathBuf = PathBuf::from(path);
    if !path.exists() {
        return fail("collection file does not exist.");
    }
    log::debug!("Loading collection from {}", path.display());
    let text: String = read_to_string(&path)?;
    Collection::parse(&text)
}

/// Labels cards by their position in the collection file.
pub struct CardLabels {
    positions: HashMap<CardId, usize>,
}

impl CardLabels {
    pub fn new(collection: &Collection) -> Self {
        let positions = collection
            .cards()
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id(), position))
            .collect();
        Self { positions }
    }

    pub fn label(&self, card: &Flashcard) -> String {
        match self.positions.get(&card.id()) {
            Some(position) => format!("[{position}] {}", card.front()),
            None => format!("[?] {}", card.front()),
        }
    }
}

#[cfg(test)]
pub mod helper {
    use std::fs::write;

    use tempfile::TempDir;
    use tempfile::tempdir;

    use leitner_core::Fallible;

    pub const SAMPLE: &str = r#"
[[cards]]
front = "What is the capital of France?"
back = "Paris"
bucket = 0

[[cards]]
front = "Bonjour"
back = "Hello"
bucket = 1

[[cards]]
front = "Photosynthesis produces what gas?"
back = "Oxygen"
bucket = 3

[[history]]
card = 0
difficulty = "wrong"

[[history]]
card = 1
difficulty = "easy"
"#;

    /// Write the sample collection to a temporary directory. The directory is
    /// returned so it outlives the test.
    pub fn write_sample() -> Fallible<(TempDir, String)> {
        let dir = tempdir()?;
        let path = dir.path().join("collection.toml");
        write(&path, SAMPLE)?;
        Ok((dir, path.display().to_string()))
    }
}
