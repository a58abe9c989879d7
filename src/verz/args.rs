use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verz")]
#[command(version)]
#[command(about = "Chapter-and-verse browser for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the corpus JSON file (overrides config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one chapter
    #[command(alias = "s")]
    Show {
        /// 1-based chapter number (defaults to the first chapter)
        chapter: Option<usize>,
    },

    /// Find a verse by exact text and print its chapter with the match marked
    Search {
        /// Verse text to look for (case-insensitive)
        term: String,
    },

    /// Print one random verse
    #[command(alias = "r")]
    Random,

    /// Browse interactively (arrow keys to page, / to search)
    #[command(alias = "b")]
    Browse {
        /// 1-based chapter number to open at
        chapter: Option<usize>,
    },
}
