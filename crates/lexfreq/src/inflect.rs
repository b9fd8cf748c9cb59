use std::collections::BTreeSet;

use wordnet_db::WordNet;
use wordnet_morphy::Morphy;

use crate::resources::Resources;

/// Every surface form of a root, the root included.
pub type InflectionSet = BTreeSet<String>;

/// Expands a root into its forms under every category WordNet lists it in.
#[derive(Clone, Copy)]
pub struct InflectionExpander<'r> {
    wordnet: &'r WordNet,
    morphy: &'r Morphy,
}

impl<'r> InflectionExpander<'r> {
    pub fn new(resources: &'r Resources) -> Self {
        Self::with_parts(resources.wordnet(), resources.morphy())
    }

    pub fn with_parts(wordnet: &'r WordNet, morphy: &'r Morphy) -> Self {
        Self { wordnet, morphy }
    }

    /// Union of the forms of `root` across its parts of speech. Empty when
    /// WordNet does not know `root`. Rule-built degrees that WordNet lists as
    /// nouns or verbs (`owner` for `own`) are left out.
    pub fn expand(&self, root: &str) -> InflectionSet {
        let exists = |pos, lemma: &str| self.wordnet.lemma_exists(pos, lemma);
        let mut forms = InflectionSet::new();
        for pos in self.wordnet.pos_of(root) {
            forms.insert(root.to_string());
            forms.extend(
                self.morphy
                    .inflections_with(pos, root, exists)
                    .into_iter()
                    .map(|inflection| inflection.form),
            );
        }
        forms
    }
}
