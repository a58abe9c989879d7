use super::CorpusSource;
use crate::error::Result;
use crate::model::Corpus;

/// In-memory source for testing.
/// Hands out a clone of a ready-made corpus.
#[derive(Default)]
pub struct InMemorySource {
    corpus: Corpus,
}

impl InMemorySource {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl CorpusSource for InMemorySource {
    fn load(&self) -> Result<Corpus> {
        Ok(self.corpus.clone())
    }
}
