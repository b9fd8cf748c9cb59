//! Lemma to surface-form generation.
//!
//! Irregular forms come from the reversed exception lists (`went go` in
//! `verb.exc` makes `went` an inflection of `go`). Regular forms are built by
//! English spelling rules, one per [`InflectionKind`], and are kept next to
//! the irregular ones: `brethren` does not replace `brothers`, nor `learnt`
//! `learned`. The one exception is the regular past of a verb whose list
//! holds a simple past tense: `go` yields `went`/`gone` but never `goed`.

use std::collections::HashSet;

use wordnet_types::{Inflection, InflectionKind, Pos};

use crate::{Morphy, normalize};

impl Morphy {
    /// Irregular surface forms of `lemma` listed in the `pos` exception file.
    pub fn irregular_forms(&self, pos: Pos, lemma: &str) -> &[String] {
        self.irregulars
            .get(&pos)
            .and_then(|table| table.get(&normalize(lemma)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every inflected form of `lemma` as a `pos`, irregular forms first.
    ///
    /// The lemma itself is not included. Callers decide whether `lemma` is a
    /// real `pos` lemma; this only applies spelling rules.
    pub fn inflections_for(&self, pos: Pos, lemma: &str) -> Vec<Inflection> {
        let lemma = normalize(lemma);
        let mut out = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut has_simple_past = false;

        for form in self.irregular_forms(pos, &lemma) {
            let kind = classify_irregular(pos, form);
            debug_assert!(kind.applies_to(pos));
            has_simple_past |= kind == InflectionKind::Past && is_simple_past(&lemma, form);
            if *form != lemma && seen.insert(form.clone()) {
                out.push(Inflection {
                    form: form.clone(),
                    kind,
                    irregular: true,
                });
            }
        }

        if lemma.is_empty() || !lemma.chars().all(|c| c.is_ascii_alphabetic()) {
            return out;
        }

        for &kind in regular_kinds(pos) {
            if kind == InflectionKind::Past && has_simple_past {
                continue;
            }
            if let Some(form) = regular_form(&lemma, kind)
                && seen.insert(form.clone())
            {
                out.push(Inflection {
                    form,
                    kind,
                    irregular: false,
                });
            }
        }
        out
    }

    /// [`Morphy::inflections_for`] with rule-built comparatives and
    /// superlatives dropped when `lemma_exists` knows them as a noun or verb:
    /// `owner` is not a degree of `own`, nor `porter` of `port`.
    pub fn inflections_with<F>(&self, pos: Pos, lemma: &str, lemma_exists: F) -> Vec<Inflection>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let mut forms = self.inflections_for(pos, lemma);
        forms.retain(|inflection| {
            inflection.irregular
                || !matches!(
                    inflection.kind,
                    InflectionKind::Comparative | InflectionKind::Superlative
                )
                || ![Pos::Noun, Pos::Verb]
                    .into_iter()
                    .any(|other| lemma_exists(other, &inflection.form))
        });
        forms
    }
}

fn regular_kinds(pos: Pos) -> &'static [InflectionKind] {
    match pos {
        Pos::Noun => &[InflectionKind::Plural],
        Pos::Verb => &[
            InflectionKind::ThirdPerson,
            InflectionKind::Past,
            InflectionKind::Participle,
        ],
        Pos::Adj => &[InflectionKind::Comparative, InflectionKind::Superlative],
        // Adverb comparison is irregular or periphrastic ("more quickly").
        Pos::Adv => &[],
    }
}

/// Exception files carry no tags, so irregular forms are classified by shape.
fn classify_irregular(pos: Pos, form: &str) -> InflectionKind {
    match pos {
        Pos::Noun => InflectionKind::Plural,
        Pos::Verb => {
            if form.ends_with("ing") {
                InflectionKind::Participle
            } else if form.ends_with('s') && !form.ends_with("ss") {
                InflectionKind::ThirdPerson
            } else {
                InflectionKind::Past
            }
        }
        Pos::Adj | Pos::Adv => {
            if form.ends_with("st") {
                InflectionKind::Superlative
            } else {
                InflectionKind::Comparative
            }
        }
    }
}

/// Whether an irregular past-kind `form` of `lemma` is a simple past tense.
/// Participles (`shown`, `proven`, `gone`) and `-t` variants of a regular
/// stem (`learnt`, `spelt`) leave room for the `-ed` form.
fn is_simple_past(lemma: &str, form: &str) -> bool {
    if ["en", "wn", "ne"].iter().any(|end| form.ends_with(end)) {
        return false;
    }
    let Some(stem) = form.strip_suffix('t') else {
        return true;
    };
    let mut tail = lemma.chars().rev();
    let undoubled = match (tail.next(), tail.next()) {
        (Some(a), Some(b)) if a == b => Some(&lemma[..lemma.len() - a.len_utf8()]),
        _ => None,
    };
    stem != lemma && undoubled != Some(stem)
}

fn regular_form(lemma: &str, kind: InflectionKind) -> Option<String> {
    match kind {
        InflectionKind::Plural => Some(sibilant_plural(lemma)),
        InflectionKind::ThirdPerson => {
            if ends_with_consonant_then(lemma, 'o') {
                Some(format!("{lemma}es"))
            } else {
                Some(sibilant_plural(lemma))
            }
        }
        InflectionKind::Past => Some(past(lemma)),
        InflectionKind::Participle => Some(participle(lemma)),
        InflectionKind::Comparative => comparable(lemma).then(|| compare(lemma, "er")),
        InflectionKind::Superlative => comparable(lemma).then(|| compare(lemma, "est")),
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_consonant_then(word: &str, last: char) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some(a), Some(b)) if a == last && !is_vowel(b))
}

fn sibilant_plural(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        format!("{word}es")
    } else if ends_with_consonant_then(word, 'y') {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// Vowel groups, counting a non-initial `y` as a vowel and ignoring a silent
/// final `e`.
fn syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut groups = 0;
    let mut in_group = false;
    for (idx, &c) in chars.iter().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && idx > 0);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    let silent_e = chars.len() > 2
        && chars[chars.len() - 1] == 'e'
        && !is_vowel(chars[chars.len() - 2]);
    if silent_e && groups > 1 {
        groups -= 1;
    }
    groups
}

/// One-syllable consonant-vowel-consonant stems double the final consonant
/// (`run` -> `running`, `big` -> `bigger`).
fn doubles_final(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    n >= 3
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 3])
        && syllables(word) == 1
}

fn with_doubled(word: &str, suffix: &str) -> String {
    let last = word.chars().last().map(String::from).unwrap_or_default();
    format!("{word}{last}{suffix}")
}

fn past(word: &str) -> String {
    if word.ends_with('e') {
        format!("{word}d")
    } else if ends_with_consonant_then(word, 'y') {
        format!("{}ied", &word[..word.len() - 1])
    } else if doubles_final(word) {
        with_doubled(word, "ed")
    } else {
        format!("{word}ed")
    }
}

fn participle(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ie") {
        format!("{stem}ying")
    } else if word.len() > 2
        && word.ends_with('e')
        && !["ee", "ye", "oe"].iter().any(|s| word.ends_with(s))
    {
        format!("{}ing", &word[..word.len() - 1])
    } else if doubles_final(word) {
        with_doubled(word, "ing")
    } else {
        format!("{word}ing")
    }
}

/// Synthetic comparison only for short adjectives (`big`, `happy`); longer
/// ones compare with "more"/"most".
fn comparable(word: &str) -> bool {
    match syllables(word) {
        1 => true,
        2 => word.ends_with('y'),
        _ => false,
    }
}

fn compare(word: &str, suffix: &str) -> String {
    if word.ends_with('e') {
        format!("{word}{}", &suffix[1..])
    } else if ends_with_consonant_then(word, 'y') {
        format!("{}i{suffix}", &word[..word.len() - 1])
    } else if doubles_final(word) {
        with_doubled(word, suffix)
    } else {
        format!("{word}{suffix}")
    }
}
