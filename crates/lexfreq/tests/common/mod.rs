#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use lexfreq::Resources;
use pos_tagger::{TaggedToken, Tagger};
use wordnet_db::WordNet;
use wordnet_morphy::Morphy;

/// Tags by word, `NN` for anything unlisted.
pub struct FixedTagger(HashMap<&'static str, &'static str>);

impl FixedTagger {
    pub fn new(tags: &[(&'static str, &'static str)]) -> Self {
        Self(tags.iter().copied().collect())
    }
}

impl Tagger for FixedTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken {
                text: token.clone(),
                tag: self.0.get(token.as_str()).copied().unwrap_or("NN").to_string(),
            })
            .collect()
    }
}

pub fn wordnet_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../wordnet-db/tests/fixtures/wn")
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub const VERB_TAGS: &[(&str, &str)] = &[
    ("go", "VB"),
    ("run", "VB"),
    ("runs", "VBZ"),
    ("goes", "VBZ"),
    ("leaves", "VBZ"),
    ("ran", "VBD"),
    ("went", "VBD"),
    ("gone", "VBN"),
    ("running", "VBG"),
    ("going", "VBG"),
    (".", "."),
    (",", ","),
];

pub fn resources_with(tags: &[(&'static str, &'static str)]) -> Resources {
    let dir = wordnet_dir();
    Resources::from_parts(
        WordNet::load(&dir).expect("load fixture wordnet"),
        Morphy::load(&dir).expect("load fixture exceptions"),
        FixedTagger::new(tags),
    )
}

pub fn resources() -> Resources {
    resources_with(VERB_TAGS)
}
