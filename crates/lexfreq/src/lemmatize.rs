use pos_tagger::TaggedToken;
use wordnet_db::WordNet;
use wordnet_morphy::Morphy;
use wordnet_types::Pos;

use crate::frequency::LemmatizedToken;
use crate::resources::Resources;

/// Coarse WordNet category for a Penn Treebank tag. Unrecognized tags
/// (punctuation, determiners, empty) fall back to noun.
pub fn coarse_pos(tag: &str) -> Pos {
    match tag.chars().next() {
        Some('J') => Pos::Adj,
        Some('V') => Pos::Verb,
        Some('N') => Pos::Noun,
        Some('R') => Pos::Adv,
        _ => Pos::Noun,
    }
}

/// Morphy lemmatization against a loaded dictionary.
#[derive(Clone, Copy)]
pub struct Lemmatizer<'r> {
    wordnet: &'r WordNet,
    morphy: &'r Morphy,
}

impl<'r> Lemmatizer<'r> {
    pub fn new(resources: &'r Resources) -> Self {
        Self::with_parts(resources.wordnet(), resources.morphy())
    }

    pub fn with_parts(wordnet: &'r WordNet, morphy: &'r Morphy) -> Self {
        Self { wordnet, morphy }
    }

    /// Shortest verified morphy candidate, or `token` itself.
    pub fn lemmatize(&self, token: &str, pos: Pos) -> String {
        self.morphy
            .lemmatize(pos, token, |pos, lemma| self.wordnet.lemma_exists(pos, lemma))
    }

    pub fn lemmatize_tagged(&self, tagged: &[TaggedToken]) -> Vec<LemmatizedToken> {
        tagged
            .iter()
            .map(|token| {
                let pos = coarse_pos(&token.tag);
                LemmatizedToken {
                    lemma: self.lemmatize(&token.text, pos),
                    surface: token.text.clone(),
                    pos,
                }
            })
            .collect()
    }

    /// Root used to group word-list entries: the lemma under the first
    /// category (noun, verb, adjective, adverb) that changes the word.
    pub fn root_of(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();
        Pos::ALL
            .into_iter()
            .map(|pos| self.lemmatize(&word, pos).replace('_', " "))
            .find(|lemma| *lemma != word)
            .unwrap_or(word)
    }
}
