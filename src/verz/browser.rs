//! # Browser controller
//!
//! The single controller instance behind every UI. It owns the corpus, the
//! page cursor, the active highlight term and the RNG; nothing else in the
//! crate holds browsing state. UIs hand it an [`Action`] and present the
//! returned [`CmdResult`] — the controller never touches a terminal itself.
//!
//! Every operation re-renders the whole page. Highlight state is derived
//! from the stored term at render time, so it is cleared and recomputed on
//! each mutation rather than patched incrementally.

use crate::commands::page::PageView;
use crate::commands::search::SearchOutcome;
use crate::commands::{navigate, page, random, search, CmdMessage, CmdResult};
use crate::model::Corpus;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A named user action, as wired from buttons, keys, or subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    /// 1-based chapter number.
    Jump(usize),
    Search(String),
    Random,
    /// Re-render the current page without mutating anything.
    Refresh,
}

pub struct Browser {
    corpus: Corpus,
    cursor: usize,
    highlight: Option<String>,
    rng: StdRng,
}

impl Browser {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            cursor: 0,
            highlight: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic RNG for tests.
    pub fn with_seed(corpus: Corpus, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(corpus)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The dispatch table mapping actions to handlers.
    pub fn dispatch(&mut self, action: Action) -> CmdResult {
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::Jump(n) => self.jump_to_chapter(n),
            Action::Search(query) => self.search(&query),
            Action::Random => self.random_verse(),
            Action::Refresh => self.render(),
        }
    }

    pub fn next(&mut self) -> CmdResult {
        self.cursor = navigate::next(self.cursor, self.corpus.chapter_count());
        self.render()
    }

    pub fn previous(&mut self) -> CmdResult {
        self.cursor = navigate::previous(self.cursor);
        self.render()
    }

    /// Jumps to a 1-based chapter number. Out-of-range numbers leave the
    /// cursor unchanged and surface a warning, never an error.
    pub fn jump_to_chapter(&mut self, chapter_number: usize) -> CmdResult {
        match navigate::jump(chapter_number, self.corpus.chapter_count()) {
            Some(cursor) => {
                self.cursor = cursor;
                self.render()
            }
            None => self.render().with_message(CmdMessage::warning(format!(
                "Chapter {} is out of range (1-{})",
                chapter_number,
                self.corpus.chapter_count()
            ))),
        }
    }

    /// Searches for an exact, case-insensitive verse match. On a hit the
    /// cursor moves to the containing chapter and the term becomes the
    /// active highlight; on a miss the highlight is cleared. A blank query
    /// only clears the highlight.
    pub fn search(&mut self, raw_query: &str) -> CmdResult {
        match search::run(&self.corpus, raw_query) {
            SearchOutcome::Empty => {
                self.highlight = None;
                self.render()
            }
            SearchOutcome::Found { location, term } => {
                self.cursor = location.chapter;
                self.highlight = Some(term);
                self.render()
                    .with_message(CmdMessage::success("Verse found."))
            }
            SearchOutcome::NotFound { .. } => {
                self.highlight = None;
                self.render()
                    .with_message(CmdMessage::error("Verse not found."))
            }
        }
    }

    /// Shows one random non-blank verse on its own, outside pagination.
    /// With nothing to pick from, reports an error and shows no page.
    pub fn random_verse(&mut self) -> CmdResult {
        match random::run(&self.corpus, &mut self.rng) {
            Some(verse) => CmdResult::default().with_spotlight(verse),
            None => CmdResult::default()
                .with_message(CmdMessage::error("No verses available.")),
        }
    }

    fn render(&self) -> CmdResult {
        CmdResult::default().with_page(self.page())
    }

    /// The current page view, or `None` for an empty corpus.
    pub fn page(&self) -> Option<PageView> {
        page::run(&self.corpus, self.cursor, self.highlight.as_deref())
    }
}
