use pos_tagger::{Tagger, word_tokenize};
use tracing::debug;

use crate::frequency::{FrequencyIndex, LemmatizedToken};
use crate::lemmatize::Lemmatizer;
use crate::normalize::normalize;
use crate::resources::Resources;

/// normalize → tokenize → tag → lemmatize, over borrowed resources.
#[derive(Clone, Copy)]
pub struct Analyzer<'r> {
    tagger: &'r dyn Tagger,
    lemmatizer: Lemmatizer<'r>,
}

impl<'r> Analyzer<'r> {
    pub fn new(resources: &'r Resources) -> Self {
        Self {
            tagger: resources.tagger(),
            lemmatizer: Lemmatizer::new(resources),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<LemmatizedToken> {
        let tokens = word_tokenize(&normalize(text));
        let tagged = self.tagger.tag(&tokens);
        self.lemmatizer.lemmatize_tagged(&tagged)
    }

    pub fn index_text(&self, text: &str) -> FrequencyIndex {
        let index = FrequencyIndex::from_tokens(self.analyze(text));
        debug!(
            "indexed {} tokens ({} lemmas, {} surface forms)",
            index.total_tokens(),
            index.lemma_len(),
            index.surface_len()
        );
        index
    }
}
