use std::collections::BTreeSet;

use wordnet_types::Pos;

use crate::resources::Resources;

/// Every lemma name sharing a synset with `word` under any part of speech.
/// `word` is lemmatized first, so `suited` finds the synsets of `suit`.
/// Multi-word lemmas keep WordNet's underscores.
pub fn synonyms(resources: &Resources, word: &str) -> BTreeSet<String> {
    let wordnet = resources.wordnet();
    let exists = |pos, lemma: &str| wordnet.lemma_exists(pos, lemma);
    let mut out = BTreeSet::new();
    for pos in Pos::ALL {
        for candidate in resources.morphy().lemmas_for(pos, word, exists) {
            for &id in wordnet.synsets_for_lemma(pos, &candidate.lemma) {
                if let Some(synset) = wordnet.get_synset(id) {
                    out.extend(synset.words.iter().map(|w| w.to_string()));
                }
            }
        }
    }
    out
}
