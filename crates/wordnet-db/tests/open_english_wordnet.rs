//! Checks against a full dictionary; set `WORDNET_DIR` to run them.

use std::env;
use std::path::PathBuf;

use wordnet_db::{LoadMode, WordNet};
use wordnet_types::Pos;

fn full_dictionary(mode: LoadMode) -> Option<WordNet> {
    let dir = PathBuf::from(env::var_os("WORDNET_DIR")?);
    Some(WordNet::load_with_mode(&dir, mode).expect("load WORDNET_DIR"))
}

#[test]
fn full_dictionary_knows_query_words() {
    let Some(wn) = full_dictionary(LoadMode::Mmap) else {
        eprintln!("WORDNET_DIR unset; skipped");
        return;
    };
    assert!(wn.synset_count() > 100_000);
    assert!(wn.pos_of("run").starts_with(&[Pos::Noun, Pos::Verb]));
    assert!(wn.lemma_exists(Pos::Noun, "leaf") && wn.lemma_exists(Pos::Verb, "leave"));

    let neighbours: Vec<&str> = wn
        .synsets_for_lemma(Pos::Adj, "suitable")
        .iter()
        .filter_map(|id| wn.get_synset(*id))
        .flat_map(|synset| synset.words)
        .collect();
    assert!(neighbours.contains(&"suited"));
}

#[test]
fn load_modes_agree_on_counts() {
    let (Some(mapped), Some(owned)) = (
        full_dictionary(LoadMode::Mmap),
        full_dictionary(LoadMode::Owned),
    ) else {
        return;
    };
    assert_eq!(mapped.lemma_count(), owned.lemma_count());
    assert_eq!(mapped.synset_count(), owned.synset_count());
}
