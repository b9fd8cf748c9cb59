//! WordNet-style morphological processing (morphy) in both directions.
//!
//! Lemmatization follows the classic morphy algorithm: check exceptions,
//! apply suffix rules, and verify candidates via a caller-provided lemma
//! existence predicate. [`Morphy::lemmatize`] picks the shortest verified
//! candidate.
//!
//! The reverse direction, [`Morphy::inflections_for`], expands a lemma into
//! its surface forms from the same exception lists plus regular English
//! inflection rules (see [`inflect`]).
//!
//! # Example
//! ```no_run
//! use wordnet_db::{LoadMode, WordNet};
//! use wordnet_morphy::Morphy;
//! use wordnet_types::Pos;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dict = "/path/to/wordnet";
//! let wn = WordNet::load_with_mode(dict, LoadMode::Mmap)?;
//! let morph = Morphy::load(dict)?;
//! let exists = |pos, lemma: &str| wn.lemma_exists(pos, lemma);
//!
//! assert_eq!(morph.lemmatize(Pos::Verb, "running", exists), "run");
//! for inflection in morph.inflections_for(Pos::Verb, "go") {
//!     println!("{:?}: {}", inflection.kind, inflection.form);
//! }
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p wordnet-morphy --example lookup -- <dict> [--demo|<word>]`.

pub mod inflect;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use wordnet_types::Pos;

/// Where a candidate lemma originated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CandidateSource {
    Surface,
    Exception,
    Rule {
        suffix: &'static str,
        replacement: &'static str,
    },
}

/// A verified lemma for a surface form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LemmaCandidate<'a> {
    pub pos: Pos,
    pub lemma: Cow<'a, str>,
    pub source: CandidateSource,
}

/// Exception tables keyed by POS: surface form to lemmas.
pub type ExceptionTable = HashMap<Pos, HashMap<String, Vec<String>>>;

/// Exception-driven morphology; lemma existence is supplied by the caller.
pub struct Morphy {
    exceptions: ExceptionTable,
    /// Same data as `exceptions`, keyed lemma to irregular surface forms.
    irregulars: ExceptionTable,
}

impl Morphy {
    /// Read `noun.exc`, `verb.exc`, `adj.exc` and `adv.exc` from `dict_dir`.
    ///
    /// An absent file counts as an empty list.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dict_dir.as_ref();
        let exceptions = Pos::ALL
            .into_iter()
            .map(|pos| {
                let path = dir.join(format!("{}.exc", pos.file_suffix()));
                read_exceptions(&path).map(|table| (pos, table))
            })
            .collect::<Result<ExceptionTable>>()?;
        Ok(Self::from_exceptions(exceptions))
    }

    /// Build from in-memory exception tables (surface form to lemmas).
    pub fn from_exceptions(exceptions: ExceptionTable) -> Self {
        let mut irregulars: ExceptionTable = HashMap::new();
        for (pos, table) in &exceptions {
            let reversed = irregulars.entry(*pos).or_default();
            for (surface, lemmas) in table {
                for lemma in lemmas {
                    let forms = reversed.entry(lemma.clone()).or_default();
                    if !forms.contains(surface) {
                        forms.push(surface.clone());
                    }
                }
            }
        }
        // Exception files are sorted by surface form; keep that order per lemma.
        for table in irregulars.values_mut() {
            for forms in table.values_mut() {
                forms.sort();
            }
        }
        Self {
            exceptions,
            irregulars,
        }
    }

    /// Number of exception entries loaded for `pos`.
    pub fn exception_count(&self, pos: Pos) -> usize {
        self.exceptions.get(&pos).map_or(0, HashMap::len)
    }

    /// Every lemma `lemma_exists` accepts for `surface` under `pos`.
    ///
    /// Order is surface form, then exception entries, then suffix rules in
    /// table order. A lemma reached twice keeps its first provenance.
    pub fn lemmas_for<'a, F>(
        &'a self,
        pos: Pos,
        surface: &str,
        lemma_exists: F,
    ) -> Vec<LemmaCandidate<'a>>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let surface = normalize(surface);
        if surface.is_empty() {
            return Vec::new();
        }
        let mut found = Verified {
            pos,
            exists: lemma_exists,
            out: Vec::new(),
        };

        found.offer(Cow::Owned(surface.clone()), CandidateSource::Surface);
        let listed = self.exceptions.get(&pos).and_then(|t| t.get(&surface));
        for lemma in listed.into_iter().flatten() {
            found.offer(Cow::Borrowed(lemma.as_str()), CandidateSource::Exception);
        }
        for rule in rules_for(pos) {
            for lemma in rule.apply(&surface) {
                found.offer(Cow::Owned(lemma), rule.source());
            }
        }
        found.out
    }

    /// Lemmatize `surface` under `pos`: the shortest verified candidate, the
    /// first one on ties, or the normalized surface form when none verify.
    pub fn lemmatize<F>(&self, pos: Pos, surface: &str, lemma_exists: F) -> String
    where
        F: Fn(Pos, &str) -> bool,
    {
        self.lemmas_for(pos, surface, lemma_exists)
            .into_iter()
            .min_by_key(|cand| cand.lemma.chars().count())
            .map(|cand| cand.lemma.into_owned())
            .unwrap_or_else(|| normalize(surface))
    }
}

struct Verified<'a, F> {
    pos: Pos,
    exists: F,
    out: Vec<LemmaCandidate<'a>>,
}

impl<'a, F> Verified<'a, F>
where
    F: Fn(Pos, &str) -> bool,
{
    fn offer(&mut self, lemma: Cow<'a, str>, source: CandidateSource) {
        if self.out.iter().any(|c| c.lemma == lemma) || !(self.exists)(self.pos, &*lemma) {
            return;
        }
        self.out.push(LemmaCandidate {
            pos: self.pos,
            lemma,
            source,
        });
    }
}

fn read_exceptions(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_exceptions(&text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(err) => Err(err).with_context(|| format!("read exception file {}", path.display())),
    }
}

/// One entry per line: the inflected form, then one or more lemmas.
fn parse_exceptions(text: &str) -> HashMap<String, Vec<String>> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace().map(normalize);
            let surface = fields.next()?;
            let lemmas: Vec<String> = fields.collect();
            (!lemmas.is_empty()).then_some((surface, lemmas))
        })
        .collect()
}

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace(' ', "_")
}

/// A detachment rule: strip `suffix`, append `replacement`.
#[derive(Clone, Copy, Debug)]
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule {
        suffix,
        replacement,
    }
}

const NOUN_RULES: &[Rule] = &[
    rule("s", ""),
    rule("ses", "s"),
    rule("ves", "f"),
    rule("xes", "x"),
    rule("zes", "z"),
    rule("ches", "ch"),
    rule("shes", "sh"),
    rule("men", "man"),
    rule("ies", "y"),
];

const VERB_RULES: &[Rule] = &[
    rule("s", ""),
    rule("ies", "y"),
    rule("es", "e"),
    rule("es", ""),
    rule("ed", "e"),
    rule("ed", ""),
    rule("ing", "e"),
    rule("ing", ""),
];

const ADJ_RULES: &[Rule] = &[
    rule("er", ""),
    rule("er", "e"),
    rule("est", ""),
    rule("est", "e"),
];

fn rules_for(pos: Pos) -> &'static [Rule] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adj | Pos::Adv => ADJ_RULES,
    }
}

impl Rule {
    fn source(self) -> CandidateSource {
        CandidateSource::Rule {
            suffix: self.suffix,
            replacement: self.replacement,
        }
    }

    /// Candidates for `surface`. A bare strip that leaves a doubled final
    /// consonant (`running` to `runn`) also offers the undoubled stem, so
    /// `passing` still reaches `pass`.
    fn apply(self, surface: &str) -> Vec<String> {
        let stem = match surface.strip_suffix(self.suffix) {
            Some(stem) if !stem.is_empty() => stem,
            _ => return Vec::new(),
        };
        let mut candidates = vec![format!("{stem}{}", self.replacement)];
        if self.replacement.is_empty()
            && let Some(undoubled) = undouble(stem)
        {
            candidates.push(undoubled.to_string());
        }
        candidates
    }
}

fn undouble(stem: &str) -> Option<&str> {
    let mut tail = stem.chars().rev();
    let last = tail.next()?;
    let doubled =
        tail.next() == Some(last) && last.is_ascii_alphabetic() && !inflect::is_vowel(last);
    doubled.then(|| &stem[..stem.len() - last.len_utf8()])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn dictionary(entries: &[(Pos, &str)]) -> impl Fn(Pos, &str) -> bool {
        let known: HashSet<(Pos, String)> = entries
            .iter()
            .map(|&(pos, lemma)| (pos, lemma.to_string()))
            .collect();
        move |pos, lemma| known.contains(&(pos, lemma.to_string()))
    }

    fn morph_with(pos: Pos, entries: &[(&str, &str)]) -> Morphy {
        let mut table: HashMap<String, Vec<String>> = HashMap::new();
        for (surface, lemma) in entries {
            table
                .entry(surface.to_string())
                .or_default()
                .push(lemma.to_string());
        }
        Morphy::from_exceptions(HashMap::from([(pos, table)]))
    }

    #[test]
    fn exception_entries_are_verified() {
        let morph = morph_with(Pos::Noun, &[("children", "child"), ("oxen", "ox")]);
        let exists = dictionary(&[(Pos::Noun, "child")]);

        let children = morph.lemmas_for(Pos::Noun, "Children", &exists);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].lemma, "child");
        assert_eq!(children[0].source, CandidateSource::Exception);
        assert!(morph.lemmas_for(Pos::Noun, "oxen", &exists).is_empty());
    }

    #[test]
    fn surface_comes_before_rule_hits() {
        let morph = Morphy::from_exceptions(HashMap::new());
        let exists = dictionary(&[(Pos::Verb, "running"), (Pos::Verb, "run")]);
        let sources: Vec<(String, CandidateSource)> = morph
            .lemmas_for(Pos::Verb, "running", exists)
            .into_iter()
            .map(|c| (c.lemma.into_owned(), c.source))
            .collect();
        assert_eq!(
            sources,
            [
                ("running".to_string(), CandidateSource::Surface),
                (
                    "run".to_string(),
                    CandidateSource::Rule {
                        suffix: "ing",
                        replacement: ""
                    }
                ),
            ]
        );
    }

    #[test]
    fn keeps_genuine_double_consonants() {
        let morph = Morphy::from_exceptions(HashMap::new());
        let exists = dictionary(&[(Pos::Verb, "pass")]);
        assert_eq!(morph.lemmatize(Pos::Verb, "passing", &exists), "pass");
        assert_eq!(morph.lemmatize(Pos::Verb, "passed", &exists), "pass");
    }

    #[test]
    fn lemmatize_prefers_shortest_candidate() {
        let morph = morph_with(Pos::Noun, &[("leaves", "leaf")]);
        let exists = dictionary(&[(Pos::Noun, "leaf"), (Pos::Noun, "leave")]);
        assert_eq!(morph.lemmatize(Pos::Noun, "leaves", &exists), "leaf");
    }

    #[test]
    fn lemmatize_is_pos_sensitive() {
        let morph = morph_with(Pos::Noun, &[("leaves", "leaf")]);
        let exists = dictionary(&[(Pos::Noun, "leaf"), (Pos::Verb, "leave")]);
        assert_eq!(morph.lemmatize(Pos::Verb, "leaves", &exists), "leave");
        assert_eq!(morph.lemmatize(Pos::Noun, "leaves", &exists), "leaf");
    }

    #[test]
    fn lemmatize_falls_back_to_surface() {
        let morph = Morphy::from_exceptions(HashMap::new());
        let exists = dictionary(&[]);
        assert_eq!(morph.lemmatize(Pos::Noun, " Zebras ", &exists), "zebras");
        assert_eq!(morph.lemmatize(Pos::Noun, "", &exists), "");
    }

    #[test]
    fn parses_exception_lines() {
        let table = parse_exceptions("axes ax axis\nbroken\n\nGeese goose\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table["axes"], ["ax", "axis"]);
        assert_eq!(table["geese"], ["goose"]);
    }

    #[test]
    fn reverses_exceptions_into_irregular_forms() {
        let morph = morph_with(Pos::Verb, &[("went", "go"), ("gone", "go")]);
        assert_eq!(morph.irregular_forms(Pos::Verb, "go"), ["gone", "went"]);
        assert!(morph.irregular_forms(Pos::Noun, "go").is_empty());
        assert_eq!(morph.exception_count(Pos::Verb), 2);
    }
}
