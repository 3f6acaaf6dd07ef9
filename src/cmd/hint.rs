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
use leitner_core::hint;

use crate::collection::load_collection;

pub fn print_hint(file: String, card: usize) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    println!("{}", render_hint(&collection, card)?);
    Ok(())
}

fn render_hint(collection: &Collection, card: usize) -> Fallible<String> {
    Ok(hint(collection.card(card)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::helper::write_sample;

    #[test]
    fn test_render_hint() -> Fallible<()> {
        let (_dir, path) = write_sample()?;
        let collection = load_collection(&path)?;
        assert_eq!(render_hint(&collection, 0)?, "What...");
        assert_eq!(render_hint(&collection, 1)?, "Bonjour...");
        assert_eq!(render_hint(&collection, 2)?, "Photosynthesis...");
        Ok(())
    }

    #[test]
    fn test_render_hint_out_of_range() -> Fallible<()> {
        let (_dir, path) = write_sample()?;
        let collection = load_collection(&path)?;
        let Err(err) = render_hint(&collection, 9) else {
            panic!("a hint was produced for a missing card");
        };
        assert_eq!(
            err.to_string(),
            "error: no card at position 9: the collection has 3 cards."
        );
        Ok(())
    }

    #[test]
    fn test_render_hint_of_blank_prompt() -> Fallible<()> {
        let collection = Collection::parse("[[cards]]\nfront = \"  \"\nback = \"b\"\n")?;
        let Err(err) = render_hint(&collection, 0) else {
            panic!("a hint was produced for a blank prompt");
        };
        assert!(err.to_string().starts_with("error: invalid argument: card #"));
        Ok(())
    }
}
