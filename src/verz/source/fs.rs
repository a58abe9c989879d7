use super::CorpusSource;
use crate::error::{Result, VerzError};
use crate::model::Corpus;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads the corpus from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileSource {
    fn load(&self) -> Result<Corpus> {
        let content = fs::read_to_string(&self.path).map_err(VerzError::Io)?;
        let corpus: Corpus =
            serde_json::from_str(&content).map_err(VerzError::Serialization)?;
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_corpus_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[[["Alpha","Beta"]],[["Gamma"]]]"#).unwrap();

        let corpus = FileSource::new(&path).load().unwrap();
        assert_eq!(corpus.chapter_count(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("nope.json")).load();
        assert!(matches!(result, Err(VerzError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json at all").unwrap();

        let result = FileSource::new(&path).load();
        assert!(matches!(result, Err(VerzError::Serialization(_))));
    }
}
