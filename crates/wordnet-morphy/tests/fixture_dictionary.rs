use std::path::PathBuf;

use wordnet_db::WordNet;
use wordnet_morphy::{CandidateSource, Morphy};
use wordnet_types::{InflectionKind, Pos};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../wordnet-db/tests/fixtures/wn")
}

fn load() -> (WordNet, Morphy) {
    let dir = fixture_dir();
    (
        WordNet::load(&dir).expect("load fixture wordnet"),
        Morphy::load(&dir).expect("load fixture exceptions"),
    )
}

#[test]
fn loads_exception_files() {
    let (_, morph) = load();
    assert_eq!(morph.exception_count(Pos::Noun), 3);
    assert_eq!(morph.exception_count(Pos::Verb), 6);
    assert_eq!(morph.irregular_forms(Pos::Verb, "go"), ["gone", "went"]);
}

#[test]
fn lemmatizes_against_fixture_index() {
    let (wn, morph) = load();
    let exists = |pos, lemma: &str| wn.lemma_exists(pos, lemma);

    assert_eq!(morph.lemmatize(Pos::Verb, "running", exists), "run");
    assert_eq!(morph.lemmatize(Pos::Noun, "running", exists), "running");
    assert_eq!(morph.lemmatize(Pos::Verb, "ran", exists), "run");
    assert_eq!(morph.lemmatize(Pos::Noun, "leaves", exists), "leaf");
    assert_eq!(morph.lemmatize(Pos::Verb, "leaves", exists), "leave");
    assert_eq!(morph.lemmatize(Pos::Adj, "bigger", exists), "big");
    assert_eq!(morph.lemmatize(Pos::Noun, "boxes", exists), "box");

    let ran = morph.lemmas_for(Pos::Verb, "ran", exists);
    assert_eq!(ran.len(), 1);
    assert_eq!(ran[0].source, CandidateSource::Exception);
}

#[test]
fn inflects_fixture_lemmas() {
    let (_, morph) = load();
    let go = morph.inflections_for(Pos::Verb, "go");
    let forms: Vec<&str> = go.iter().map(|i| i.form.as_str()).collect();
    assert_eq!(forms, ["gone", "went", "goes", "going"]);
    assert!(go.iter().all(|i| i.kind.applies_to(Pos::Verb)));
    assert_eq!(
        go.iter().filter(|i| i.kind == InflectionKind::Past).count(),
        2
    );
}

fn forms(morph: &Morphy, pos: Pos, lemma: &str) -> Vec<String> {
    morph
        .inflections_for(pos, lemma)
        .into_iter()
        .map(|i| i.form)
        .collect()
}

#[test]
fn alternate_irregulars_keep_regular_forms() {
    let (_, morph) = load();
    assert_eq!(
        forms(&morph, Pos::Verb, "learn"),
        ["learnt", "learns", "learned", "learning"]
    );
    assert_eq!(
        forms(&morph, Pos::Verb, "show"),
        ["shown", "shows", "showed", "showing"]
    );
    assert_eq!(forms(&morph, Pos::Noun, "brother"), ["brethren", "brothers"]);
    assert_eq!(
        forms(&morph, Pos::Adj, "old"),
        ["elder", "eldest", "older", "oldest"]
    );
    assert!(!forms(&morph, Pos::Verb, "leave").contains(&"leaved".to_string()));
}

#[test]
fn degrees_that_are_nouns_are_not_inflections() {
    let (wn, morph) = load();
    let own: Vec<String> = morph
        .inflections_with(Pos::Adj, "own", |pos, lemma| wn.lemma_exists(pos, lemma))
        .into_iter()
        .map(|i| i.form)
        .collect();
    assert_eq!(own, ["ownest"]);
    assert!(forms(&morph, Pos::Adj, "own").contains(&"owner".to_string()));
}
