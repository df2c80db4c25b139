use std::path::PathBuf;

use clap::Parser;
use lexo_types::SearchMode;

/// Look words up in an English dictionary and the Portuguese open dictionary
#[derive(Debug, Parser)]
#[command(name = "lexo", version)]
pub struct Args {
    /// Word to look up; without one the interactive view starts
    pub word: Option<String>,

    /// exact, prefix, suffix, contains, similar, random or wotd
    #[arg(short, long)]
    pub mode: Option<SearchMode>,

    /// JSON profile to read instead of the environment
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// A word, or a mode that needs none, means a single search
    pub fn is_one_shot(&self) -> bool {
        self.word.is_some() || self.mode.is_some_and(|mode| !mode.takes_word())
    }
}
