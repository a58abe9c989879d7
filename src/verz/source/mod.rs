//! # Corpus sources
//!
//! Loading is abstracted behind the [`CorpusSource`] trait so the browser
//! core never touches the filesystem directly:
//!
//! - [`fs::FileSource`]: production loader reading a JSON file
//!   (by default `data.json`) containing the nested chapter/row/verse
//!   arrays.
//! - [`memory::InMemorySource`]: ready-made corpus for tests.
//!
//! A source is consulted exactly once, at startup. There is no retry and no
//! partial load: any I/O or parse failure surfaces as an error and the
//! browser is simply never constructed.

use crate::error::Result;
use crate::model::Corpus;

pub mod fs;
pub mod memory;

/// Abstract interface for obtaining the verse corpus.
pub trait CorpusSource {
    /// Load the full corpus. Called once at startup.
    fn load(&self) -> Result<Corpus>;
}
