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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use leitner_core::Collection;
use leitner_core::Fallible;
use leitner_core::ProgressStats;
use leitner_core::progress_stats;

use crate::collection::load_collection;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum StatsFormat {
    /// A human-readable table.
    Text,
    /// JSON, for other programs.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(file: String, format: StatsFormat) -> Fallible<()> {
    let collection: Collection = load_collection(&file)?;
    println!("{}", render_stats(&collection, format)?);
    Ok(())
}

fn render_stats(collection: &Collection, format: StatsFormat) -> Fallible<String> {
    let stats: ProgressStats = progress_stats(collection.buckets(), collection.history());
    match format {
        StatsFormat::Text => Ok(render_text(&stats)),
        StatsFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
    }
}

fn render_text(stats: &ProgressStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Cards: {}\n", stats.total_cards));
    out.push_str(&format!("Accuracy: {:.1}%\n", stats.accuracy * 100.0));
    out.push_str("Bucket  Cards  Reviews");
    for (index, count) in &stats.per_bucket_counts {
        let reviews: usize = stats
            .per_bucket_review_counts
            .get(index)
            .copied()
            .unwrap_or(0);
        out.push_str(&format!("\n{index:<6}  {count:<5}  {reviews}"));
    }
    out
}
