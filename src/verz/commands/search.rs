use crate::model::{Corpus, VerseRef};
use crate::sanitize::sanitize;

/// What a search attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank after trimming; nothing to do.
    Empty,
    /// First matching cell in document order, with the sanitized term to
    /// highlight and echo back.
    Found { location: VerseRef, term: String },
    /// No cell matched the sanitized term.
    NotFound { term: String },
}

/// Scans the corpus for a verse cell equal to the query, case-insensitively.
///
/// The raw query is trimmed and sanitized before comparison, so input
/// containing markup is matched (and later echoed) in its escaped form.
/// Chapters are scanned in order, rows within a chapter in order, cells
/// within a row in order; the first match wins.
pub fn run(corpus: &Corpus, raw_query: &str) -> SearchOutcome {
    let term = sanitize(raw_query.trim());
    if term.is_empty() {
        return SearchOutcome::Empty;
    }

    let needle = term.to_lowercase();
    for (ci, chapter) in corpus.chapters.iter().enumerate() {
        for (ri, row) in chapter.rows.iter().enumerate() {
            for (celli, cell) in row.cells.iter().enumerate() {
                if cell.to_lowercase() == needle {
                    return SearchOutcome::Found {
                        location: VerseRef {
                            chapter: ci,
                            row: ri,
                            cell: celli,
                        },
                        term,
                    };
                }
            }
        }
    }

    SearchOutcome::NotFound { term }
}
