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

use clap::Parser;

use crate::cmd::answer::Answer;
use crate::cmd::answer::answer_card;
use crate::cmd::buckets::print_buckets;
use crate::cmd::hint::print_hint;
use crate::cmd::range::print_range;
use crate::cmd::review::DayRule;
use crate::cmd::review::print_review;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use leitner_core::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Print every bucket, from zero up to the highest one.
    Buckets {
        /// Path to the collection file.
        file: String,
    },
    /// Print the lowest and highest buckets that hold cards.
    Range {
        /// Path to the collection file.
        file: String,
    },
    /// Print the cards due for review on a given day.
    Review {
        /// Path to the collection file.
        file: String,
        /// The day counter. Must be non-negative.
        #[arg(long, allow_negative_numbers = true)]
        day: i64,
        /// Which day is the first review day of every bucket.
        #[arg(long, default_value_t = DayRule::ZeroBased)]
        rule: DayRule,
    },
    /// Print a hint for a card.
    Hint {
        /// Path to the collection file.
        file: String,
        /// Position of the card in the collection file, starting from zero.
        #[arg(long)]
        card: usize,
    },
    /// Record an answer and emit the updated collection.
    Answer {
        /// Path to the collection file. It is never modified.
        file: String,
        /// Position of the card in the collection file, starting from zero.
        #[arg(long)]
        card: usize,
        /// How well the card was recalled.
        #[arg(long)]
        difficulty: Answer,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Print progress statistics.
    Stats {
        /// Path to the collection file.
        file: String,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Buckets { file } => print_buckets(file),
        Command::Range { file } => print_range(file),
        Command::Review { file, day, rule } => print_review(file, day, rule),
        Command::Hint { file, card } => print_hint(file, card),
        Command::Answer {
            file,
            card,
            difficulty,
            output,
        } => answer_card(file, card, difficulty, output),
        Command::Stats { file, format } => print_stats(file, format),
    }
}
