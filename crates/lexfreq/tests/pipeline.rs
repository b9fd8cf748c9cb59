mod common;

use lexfreq::{
    Analyzer, FrequencyIndex, InflectionExpander, LookupEngine, MatchStrategy, Resources,
};
use pos_tagger::Tagger;
use wordnet_types::Pos;

use common::{resources, resources_with};

fn forms(result: &lexfreq::QueryResult) -> Vec<(&str, u64)> {
    result
        .forms()
        .iter()
        .map(|f| (f.form.as_str(), f.count))
        .collect()
}

fn exact(res: &Resources) -> LookupEngine<'_> {
    LookupEngine::new(MatchStrategy::ExactLemma, InflectionExpander::new(res))
}

#[test]
fn indexes_scenario_sentence_under_one_lemma() {
    let res = resources();
    let analyzer = Analyzer::new(&res);
    let tokens = analyzer.analyze("Runs running RAN. A) option1 42");
    let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
    assert_eq!(surfaces, ["runs", "running", "ran", ".", "option"]);
    assert!(tokens[..3].iter().all(|t| t.lemma == "run" && t.pos == Pos::Verb));
    assert_eq!(tokens[4].lemma, "option");
    // Punctuation falls back to the noun category.
    assert_eq!(tokens[3].pos, Pos::Noun);

    let index = analyzer.index_text("Runs running RAN. A) option1 42");
    assert_eq!(index.lemma_count("run"), 3);
    assert_eq!(index.total_tokens(), 5);
}

#[test]
fn exact_lemma_sum_matches_aggregate() {
    let res = resources();
    let index = Analyzer::new(&res).index_text("Runs running RAN. He runs; they ran.");
    let engine = exact(&res);
    let result = engine.query("run", &index);
    assert_eq!(forms(&result), [("ran", 2), ("runs", 2), ("running", 1)]);
    assert_eq!(result.total(), index.lemma_count("run"));
    for lemma in index.lemmas() {
        assert_eq!(engine.query(lemma, &index).total(), index.lemma_count(lemma));
    }
}

#[test]
fn lemmatization_follows_the_tag() {
    let as_verb = resources();
    let index = Analyzer::new(&as_verb).index_text("leaves");
    assert!(exact(&as_verb).query("leaf", &index).is_empty());
    assert_eq!(forms(&exact(&as_verb).query("leave", &index)), [("leaves", 1)]);

    let as_noun = resources_with(&[("leaves", "NNS")]);
    let index = Analyzer::new(&as_noun).index_text("leaves");
    assert_eq!(forms(&exact(&as_noun).query("leaf", &index)), [("leaves", 1)]);
}

#[test]
fn inflection_expansion_finds_irregular_forms() {
    let res = resources();
    let index = Analyzer::new(&res).index_text("He went home. She is going, and he goes too.");
    let engine = LookupEngine::new(
        MatchStrategy::InflectionExpansion,
        InflectionExpander::new(&res),
    );
    let result = engine.query("go", &index);
    assert_eq!(forms(&result), [("goes", 1), ("going", 1), ("went", 1)]);
    assert_eq!(engine.query("  GO ", &index), result);
}

#[test]
fn inflection_expansion_counts_surfaces_across_lemmas() {
    // "running" tagged as a noun keeps its own lemma but still counts as a form of "run".
    let res = resources_with(&[("running", "NN"), ("runs", "VBZ")]);
    let index = Analyzer::new(&res).index_text("running runs");
    assert_eq!(index.lemma_count("running"), 1);
    let engine = LookupEngine::new(
        MatchStrategy::InflectionExpansion,
        InflectionExpander::new(&res),
    );
    assert_eq!(forms(&engine.query("run", &index)), [("running", 1), ("runs", 1)]);
}

#[test]
fn unknown_words_match_only_themselves() {
    let res = resources();
    let index = Analyzer::new(&res).index_text("zebras zebra zebra");
    let expander = InflectionExpander::new(&res);
    assert!(expander.expand("zebra").is_empty());
    let engine = LookupEngine::new(MatchStrategy::InflectionExpansion, expander);
    assert_eq!(forms(&engine.query("zebra", &index)), [("zebra", 2)]);
    assert!(engine.query("giraffe", &index).is_empty());
}

#[test]
fn expands_roots_across_parts_of_speech() {
    let res = resources();
    let expander = InflectionExpander::new(&res);
    let go: Vec<String> = expander.expand("go").into_iter().collect();
    // The noun "go" pluralizes regularly.
    assert_eq!(go, ["go", "goes", "going", "gone", "gos", "went"]);
    let run = expander.expand("run");
    assert!(run.contains("ran") && run.contains("runs") && run.contains("running"));
}

#[test]
fn indexing_is_deterministic() {
    let res = resources();
    let analyzer = Analyzer::new(&res);
    let text = "She leaves early; the leaves fall. He went, she goes, they ran.";
    let first: FrequencyIndex = analyzer.index_text(text);
    let second = analyzer.index_text(text);
    assert_eq!(first, second);

    let engine = LookupEngine::new(MatchStrategy::default(), InflectionExpander::new(&res));
    assert_eq!(engine.query("leave", &first), engine.query("leave", &second));
}

#[test]
fn fixed_tagger_tags_everything() {
    let res = resources();
    let tokens: Vec<String> = ["go", "somewhere", "."].map(String::from).to_vec();
    let tags: Vec<String> = res.tagger().tag(&tokens).into_iter().map(|t| t.tag).collect();
    assert_eq!(tags, ["VB", "NN", "."]);
}

#[test]
fn expansion_keeps_regular_forms_next_to_irregular_ones() {
    let res = resources();
    let index = Analyzer::new(&res)
        .index_text("He showed it and has shown it. She learned it. His brothers are older.");
    let engine = LookupEngine::new(
        MatchStrategy::InflectionExpansion,
        InflectionExpander::new(&res),
    );
    assert_eq!(forms(&engine.query("show", &index)), [("showed", 1), ("shown", 1)]);
    assert_eq!(forms(&engine.query("learn", &index)), [("learned", 1)]);
    assert_eq!(forms(&engine.query("brother", &index)), [("brothers", 1)]);
    assert_eq!(forms(&engine.query("old", &index)), [("older", 1)]);

    let show: Vec<String> = InflectionExpander::new(&res).expand("show").into_iter().collect();
    assert_eq!(show, ["show", "showed", "showing", "shown", "shows"]);
}

#[test]
fn expansion_skips_degrees_that_are_nouns() {
    let res = resources();
    let expander = InflectionExpander::new(&res);
    let own: Vec<String> = expander.expand("own").into_iter().collect();
    assert_eq!(own, ["own", "ownest"]);

    let index = Analyzer::new(&res).index_text("The owner sold his own car");
    let engine = LookupEngine::new(MatchStrategy::InflectionExpansion, expander);
    assert_eq!(forms(&engine.query("own", &index)), [("own", 1)]);
}
