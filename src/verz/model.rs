use serde::{Deserialize, Serialize};

/// A single table row within a chapter: an ordered list of verse cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// One page worth of content: an ordered list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chapter {
    pub rows: Vec<Row>,
}

impl Chapter {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// The full verse collection, loaded once at startup and immutable after.
///
/// The on-disk shape is a bare nested JSON array (chapters → rows → verse
/// strings), which the transparent wrappers map onto directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub chapters: Vec<Chapter>,
}

/// Document-order location of a single verse cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRef {
    pub chapter: usize,
    pub row: usize,
    pub cell: usize,
}

impl Corpus {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// All verses in document order, chapter by chapter, row by row.
    pub fn verses(&self) -> impl Iterator<Item = &str> {
        self.chapters
            .iter()
            .flat_map(|c| c.rows.iter())
            .flat_map(|r| r.cells.iter())
            .map(String::as_str)
    }

    /// Builds a corpus from borrowed string slices. Test convenience.
    pub fn from_slices(chapters: &[&[&[&str]]]) -> Self {
        Self {
            chapters: chapters
                .iter()
                .map(|rows| {
                    Chapter::new(
                        rows.iter()
                            .map(|cells| {
                                Row::new(cells.iter().map(|s| s.to_string()).collect())
                            })
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_array_shape() {
        let json = r#"[[["Alpha","Beta"]],[["Gamma"]]]"#;
        let corpus: Corpus = serde_json::from_str(json).unwrap();

        assert_eq!(corpus.chapter_count(), 2);
        assert_eq!(corpus.chapter(0).unwrap().rows[0].cells, vec!["Alpha", "Beta"]);
        assert_eq!(corpus.chapter(1).unwrap().rows[0].cells, vec!["Gamma"]);
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(serde_json::from_str::<Corpus>(r#"{"chapters": 1}"#).is_err());
        assert!(serde_json::from_str::<Corpus>(r#"[["flat strings"]]"#).is_err());
    }

    #[test]
    fn empty_corpus_has_no_chapters() {
        let corpus: Corpus = serde_json::from_str("[]").unwrap();
        assert!(corpus.is_empty());
        assert!(corpus.chapter(0).is_none());
    }

    #[test]
    fn verses_iterate_in_document_order() {
        let corpus = Corpus::from_slices(&[&[&["a", "b"], &["c"]], &[&["d"]]]);
        let all: Vec<&str> = corpus.verses().collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }
}
