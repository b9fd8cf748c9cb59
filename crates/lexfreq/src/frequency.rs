use std::collections::BTreeMap;

use wordnet_types::Pos;

/// One token after tagging and lemmatization.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LemmatizedToken {
    pub lemma: String,
    pub surface: String,
    pub pos: Pos,
}

/// Occurrence counts for one source, keyed by lemma and surface form.
///
/// Built once from a token stream and read-only afterwards. Every lemma key
/// was observed at least once, and the per-surface totals always sum to
/// [`FrequencyIndex::total_tokens`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrequencyIndex {
    by_lemma: BTreeMap<String, BTreeMap<String, u64>>,
    by_surface: BTreeMap<String, u64>,
    total_tokens: u64,
}

impl FrequencyIndex {
    pub fn from_tokens(tokens: impl IntoIterator<Item = LemmatizedToken>) -> Self {
        let mut index = Self::default();
        for token in tokens {
            index.record(token.lemma, token.surface);
        }
        index
    }

    fn record(&mut self, lemma: String, surface: String) {
        *self.by_surface.entry(surface.clone()).or_insert(0) += 1;
        *self
            .by_lemma
            .entry(lemma)
            .or_default()
            .entry(surface)
            .or_insert(0) += 1;
        self.total_tokens += 1;
    }

    /// Surface forms recorded under `lemma`, with their counts.
    pub fn surfaces_of(&self, lemma: &str) -> impl Iterator<Item = (&str, u64)> {
        self.by_lemma
            .get(lemma)
            .into_iter()
            .flatten()
            .map(|(surface, count)| (surface.as_str(), *count))
    }

    pub fn lemma_count(&self, lemma: &str) -> u64 {
        self.by_lemma
            .get(lemma)
            .map_or(0, |surfaces| surfaces.values().sum())
    }

    /// Occurrences of `surface`, whatever lemma each one was given.
    pub fn surface_count(&self, surface: &str) -> u64 {
        self.by_surface.get(surface).copied().unwrap_or(0)
    }

    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.by_lemma.keys().map(String::as_str)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (&str, u64)> {
        self.by_surface.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn lemma_len(&self) -> usize {
        self.by_lemma.len()
    }

    pub fn surface_len(&self) -> usize {
        self.by_surface.len()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(lemma: &str, surface: &str, pos: Pos) -> LemmatizedToken {
        LemmatizedToken {
            lemma: lemma.into(),
            surface: surface.into(),
            pos,
        }
    }

    fn sample() -> FrequencyIndex {
        FrequencyIndex::from_tokens([
            token("run", "runs", Pos::Verb),
            token("run", "running", Pos::Verb),
            token("running", "running", Pos::Noun),
            token("run", "ran", Pos::Verb),
            token("run", "runs", Pos::Verb),
            token(".", ".", Pos::Noun),
        ])
    }

    #[test]
    fn tallies_lemma_and_surface() {
        let index = sample();
        assert_eq!(index.lemma_count("run"), 4);
        assert_eq!(index.lemma_count("running"), 1);
        assert_eq!(index.lemma_count("walk"), 0);
        assert_eq!(index.surface_count("running"), 2);
        assert_eq!(index.surface_count("runs"), 2);
        assert_eq!(
            index.surfaces_of("run").collect::<Vec<_>>(),
            [("ran", 1), ("running", 1), ("runs", 2)]
        );
        assert_eq!(index.surfaces_of("walk").count(), 0);
        assert_eq!(index.lemmas().collect::<Vec<_>>(), [".", "run", "running"]);
    }

    #[test]
    fn totals_agree() {
        let index = sample();
        assert_eq!(index.total_tokens(), 6);
        let by_surface: u64 = index.surfaces().map(|(_, c)| c).sum();
        let by_lemma: u64 = index.lemmas().map(|l| index.lemma_count(l)).sum();
        assert_eq!(by_surface, 6);
        assert_eq!(by_lemma, 6);
        assert_eq!(index.lemma_len(), 3);
        assert_eq!(index.surface_len(), 4);
    }

    #[test]
    fn empty_stream_builds_empty_index() {
        let index = FrequencyIndex::from_tokens(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index, FrequencyIndex::default());
    }
}
