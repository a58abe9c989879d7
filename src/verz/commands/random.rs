use crate::model::Corpus;
use rand::Rng;

/// Picks one non-blank verse uniformly at random.
///
/// The corpus is flattened in document order and whitespace-only entries are
/// dropped first, so a blank verse can never be returned. `None` when
/// nothing remains after filtering.
pub fn run<R: Rng>(corpus: &Corpus, rng: &mut R) -> Option<String> {
    let candidates: Vec<&str> = corpus
        .verses()
        .filter(|v| !v.trim().is_empty())
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let pick = rng.gen_range(0..candidates.len());
    Some(candidates[pick].to_string())
}
