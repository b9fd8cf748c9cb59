//! Averaged-perceptron part-of-speech tagger.
//!
//! Reads the JSON model NLTK distributes as `averaged_perceptron_tagger_eng`:
//! `*.weights.json` (feature → tag → weight), `*.tagdict.json` (frequent,
//! unambiguous words → tag) and `*.classes.json` (the tag set).
//!
//! Tagging walks the tokens left to right. A word found in the tag
//! dictionary takes its tag directly; anything else is scored from
//! contextual features that include the two previously assigned tags.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::{TaggedToken, Tagger, TaggerError};

/// File name prefix of the model files NLTK ships.
pub const MODEL_PREFIX: &str = "averaged_perceptron_tagger_eng";

/// Tag used when the model cannot score a token at all.
pub const FALLBACK_TAG: &str = "NN";

const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];

type Features = BTreeMap<String, u32>;

/// Linear model over sparse string features.
#[derive(Clone, Debug, Default)]
pub struct AveragedPerceptron {
    weights: HashMap<String, HashMap<String, f64>>,
    classes: BTreeSet<String>,
}

impl AveragedPerceptron {
    pub fn new(
        weights: HashMap<String, HashMap<String, f64>>,
        classes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            weights,
            classes: classes.into_iter().collect(),
        }
    }

    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Highest-scoring class; ties go to the lexicographically greatest
    /// class. `None` when the model has no classes.
    pub fn predict(&self, features: &Features) -> Option<&str> {
        let mut scores: HashMap<&str, f64> = HashMap::new();
        for (feature, value) in features {
            if *value == 0 {
                continue;
            }
            let Some(weights) = self.weights.get(feature) else {
                continue;
            };
            for (label, weight) in weights {
                *scores.entry(label.as_str()).or_insert(0.0) += f64::from(*value) * weight;
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for class in &self.classes {
            let score = scores.get(class.as_str()).copied().unwrap_or(0.0);
            match best {
                Some((_, best_score)) if score < best_score => {}
                _ => best = Some((class.as_str(), score)),
            }
        }
        best.map(|(class, _)| class)
    }
}

/// Tag dictionary plus perceptron model.
#[derive(Clone, Debug, Default)]
pub struct PerceptronTagger {
    model: AveragedPerceptron,
    tagdict: HashMap<String, String>,
}

impl PerceptronTagger {
    pub fn new(model: AveragedPerceptron, tagdict: HashMap<String, String>) -> Self {
        Self { model, tagdict }
    }

    /// Load the three model files from `dir`.
    ///
    /// Both NLTK's prefixed names (`averaged_perceptron_tagger_eng.weights.json`)
    /// and bare names (`weights.json`) are accepted.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TaggerError> {
        let dir = dir.as_ref();
        let weights: HashMap<String, HashMap<String, f64>> =
            read_json(&model_file(dir, "weights")?)?;
        let tagdict: HashMap<String, String> = read_json(&model_file(dir, "tagdict")?)?;
        let classes: Vec<String> = read_json(&model_file(dir, "classes")?)?;

        info!(
            "tagger model loaded from {}: {} features, {} classes, {} tagdict entries",
            dir.display(),
            weights.len(),
            classes.len(),
            tagdict.len()
        );
        Ok(Self::new(AveragedPerceptron::new(weights, classes), tagdict))
    }

    pub fn model(&self) -> &AveragedPerceptron {
        &self.model
    }

    /// Tag `tokens` in order, feeding each assigned tag into the next
    /// token's features.
    pub fn tag_tokens(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let context: Vec<String> = START
            .iter()
            .map(|s| s.to_string())
            .chain(tokens.iter().map(|t| normalize(t)))
            .chain(END.iter().map(|s| s.to_string()))
            .collect();

        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();
        let mut out = Vec::with_capacity(tokens.len());
        for (i, word) in tokens.iter().enumerate() {
            let tag = match self.tagdict.get(word) {
                Some(tag) => tag.clone(),
                None => {
                    let features = features(i, word, &context, &prev, &prev2);
                    self.model
                        .predict(&features)
                        .unwrap_or(FALLBACK_TAG)
                        .to_string()
                }
            };
            prev2 = std::mem::replace(&mut prev, tag.clone());
            out.push(TaggedToken {
                text: word.clone(),
                tag,
            });
        }
        out
    }
}

impl Tagger for PerceptronTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        self.tag_tokens(tokens)
    }
}

fn model_file(dir: &Path, name: &str) -> Result<PathBuf, TaggerError> {
    let prefixed = dir.join(format!("{MODEL_PREFIX}.{name}.json"));
    if prefixed.exists() {
        return Ok(prefixed);
    }
    let bare = dir.join(format!("{name}.json"));
    if bare.exists() {
        return Ok(bare);
    }
    Err(TaggerError::MissingModel(prefixed))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, TaggerError> {
    let bytes = fs::read(path).map_err(|source| TaggerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| TaggerError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Collapse hyphenated words, years and numbers into shared placeholders.
fn normalize(word: &str) -> String {
    if word.contains('-') && !word.starts_with('-') {
        "!HYPHEN".to_string()
    } else if word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
        "!YEAR".to_string()
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        "!DIGITS".to_string()
    } else {
        word.to_lowercase()
    }
}

fn suffix3(word: &str) -> &str {
    match word.char_indices().rev().nth(2) {
        Some((idx, _)) => &word[idx..],
        None => word,
    }
}

fn features(i: usize, word: &str, context: &[String], prev: &str, prev2: &str) -> Features {
    let mut features = Features::new();
    let mut add = |parts: &[&str]| {
        *features.entry(parts.join(" ")).or_insert(0) += 1;
    };

    let i = i + START.len();
    let first = word.chars().next().map(String::from).unwrap_or_default();
    add(&["bias"]);
    add(&["i suffix", suffix3(word)]);
    add(&["i pref1", first.as_str()]);
    add(&["i-1 tag", prev]);
    add(&["i-2 tag", prev2]);
    add(&["i tag+i-2 tag", prev, prev2]);
    add(&["i word", context[i].as_str()]);
    add(&["i-1 tag+i word", prev, context[i].as_str()]);
    add(&["i-1 word", context[i - 1].as_str()]);
    add(&["i-1 suffix", suffix3(&context[i - 1])]);
    add(&["i-2 word", context[i - 2].as_str()]);
    add(&["i+1 word", context[i + 1].as_str()]);
    add(&["i+1 suffix", suffix3(&context[i + 1])]);
    add(&["i+2 word", context[i + 2].as_str()]);
    features
}
