use crate::model::Corpus;

/// A single rendered cell: the verse text plus its highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub highlighted: bool,
}

/// Everything a UI needs to draw one page: the chapter's rows with per-cell
/// highlight flags, the 1-based page counter, and whether the previous/next
/// controls should be enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub chapter_number: usize,
    pub chapter_count: usize,
    pub rows: Vec<Vec<CellView>>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Assembles the view for the chapter at `cursor`.
///
/// Highlight state is recomputed from scratch on every call: a cell is
/// marked iff its text equals `highlight` case-insensitively. Returns
/// `None` for an empty corpus or an out-of-range cursor, in which case
/// nothing is displayed.
pub fn run(corpus: &Corpus, cursor: usize, highlight: Option<&str>) -> Option<PageView> {
    let chapter = corpus.chapter(cursor)?;
    let term = highlight.map(str::to_lowercase);

    let rows = chapter
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| CellView {
                    text: cell.clone(),
                    highlighted: term
                        .as_deref()
                        .is_some_and(|t| cell.to_lowercase() == t),
                })
                .collect()
        })
        .collect();

    Some(PageView {
        chapter_number: cursor + 1,
        chapter_count: corpus.chapter_count(),
        rows,
        has_previous: cursor > 0,
        has_next: cursor + 1 < corpus.chapter_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_slices(&[&[&["Alpha", "Beta"]], &[&["Gamma"]]])
    }

    #[test]
    fn page_shows_exactly_the_chapter_rows_in_order() {
        let view = run(&corpus(), 0, None).unwrap();
        let texts: Vec<&str> = view.rows[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Alpha", "Beta"]);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn counter_is_one_based() {
        let view = run(&corpus(), 1, None).unwrap();
        assert_eq!(view.chapter_number, 2);
        assert_eq!(view.chapter_count, 2);
    }

    #[test]
    fn navigation_flags_disable_at_the_ends() {
        let first = run(&corpus(), 0, None).unwrap();
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = run(&corpus(), 1, None).unwrap();
        assert!(last.has_previous);
        assert!(!last.has_next);
    }

    #[test]
    fn highlight_marks_exactly_the_equal_cells() {
        let view = run(&corpus(), 0, Some("beta")).unwrap();
        assert!(!view.rows[0][0].highlighted);
        assert!(view.rows[0][1].highlighted);
    }

    #[test]
    fn no_highlight_without_a_term() {
        let view = run(&corpus(), 0, None).unwrap();
        assert!(view.rows[0].iter().all(|c| !c.highlighted));
    }

    #[test]
    fn empty_corpus_yields_no_page() {
        assert!(run(&Corpus::default(), 0, None).is_none());
    }

    #[test]
    fn out_of_range_cursor_yields_no_page() {
        assert!(run(&corpus(), 2, None).is_none());
    }
}
