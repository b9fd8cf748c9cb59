//! Shared types for the WordNet crates in this workspace.
//!
//! [`Pos`] and [`SynsetId`] key into a loaded dictionary, [`Synset`] is the
//! borrowed view a loader hands out, and [`Inflection`] describes one surface
//! form generated from a lemma.
//!
//! ```rust
//! use wordnet_types::{InflectionKind, Pos};
//!
//! let pos = Pos::from_char('v').unwrap();
//! assert_eq!(pos, Pos::Verb);
//! assert!(InflectionKind::Past.applies_to(pos));
//! ```

use std::fmt;

/// Part-of-speech marker as used by WordNet files (`n`, `v`, `a`/`s`, `r`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Every part of speech, in the order lookups try them.
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

    /// Parse a WordNet POS character into an enum.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adj),
            'r' => Some(Pos::Adv),
            _ => None,
        }
    }

    /// Emit the POS character used in `index.*`/`data.*`.
    pub fn to_char(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adj => 'a',
            Pos::Adv => 'r',
        }
    }

    /// File suffix used by the dictionary (`index.noun`, `verb.exc`, ...).
    pub fn file_suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.file_suffix())
    }
}

/// `(offset, pos)` pair uniquely identifying a synset within the WordNet files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SynsetId {
    pub pos: Pos,
    pub offset: u32,
}

/// Borrowed view of a synset: its member lemmas and gloss definition.
#[derive(Clone, Debug)]
pub struct Synset<'a> {
    pub id: SynsetId,
    pub words: Vec<&'a str>,
    pub definition: &'a str,
}

/// Grammatical role of a generated surface form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum InflectionKind {
    /// Noun plural (`leaves`, `boxes`).
    Plural,
    /// Verb third person singular present (`goes`).
    ThirdPerson,
    /// Verb past tense or past participle (`went`, `gone`, `walked`).
    Past,
    /// Verb present participle (`going`).
    Participle,
    /// Adjective/adverb comparative (`bigger`, `better`).
    Comparative,
    /// Adjective/adverb superlative (`biggest`, `best`).
    Superlative,
}

impl InflectionKind {
    /// Whether a lemma of `pos` can take this kind of inflection.
    pub fn applies_to(self, pos: Pos) -> bool {
        match self {
            InflectionKind::Plural => pos == Pos::Noun,
            InflectionKind::ThirdPerson | InflectionKind::Past | InflectionKind::Participle => {
                pos == Pos::Verb
            }
            InflectionKind::Comparative | InflectionKind::Superlative => {
                matches!(pos, Pos::Adj | Pos::Adv)
            }
        }
    }
}

/// One inflected surface form of a lemma.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Inflection {
    pub form: String,
    pub kind: InflectionKind,
    /// `true` when the form came from an exception list rather than a rule.
    pub irregular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pos_chars() {
        assert_eq!(Pos::from_char('n'), Some(Pos::Noun));
        assert_eq!(Pos::from_char('s'), Some(Pos::Adj));
        assert_eq!(Pos::from_char('x'), None);
        for pos in Pos::ALL {
            assert_eq!(Pos::from_char(pos.to_char()), Some(pos));
        }
    }

    #[test]
    fn displays_file_suffix() {
        assert_eq!(Pos::Adv.to_string(), "adv");
        assert_eq!(format!("index.{}", Pos::Noun.file_suffix()), "index.noun");
    }

    #[test]
    fn inflection_kinds_match_pos() {
        assert!(InflectionKind::Plural.applies_to(Pos::Noun));
        assert!(!InflectionKind::Plural.applies_to(Pos::Verb));
        assert!(InflectionKind::Participle.applies_to(Pos::Verb));
        assert!(InflectionKind::Superlative.applies_to(Pos::Adv));
        assert!(!InflectionKind::Comparative.applies_to(Pos::Noun));
    }
}
