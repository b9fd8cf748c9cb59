//! Query resolution against a [`FrequencyIndex`].
//!
//! Both strategies report raw per-surface-form counts:
//!
//! - [`MatchStrategy::ExactLemma`] treats the query as a lemma and returns
//!   every surface form the pipeline assigned to it.
//! - [`MatchStrategy::InflectionExpansion`] expands the query into its
//!   inflections (plus the query itself) and returns the forms that occur in
//!   the source, whichever lemma they were given.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::frequency::FrequencyIndex;
use crate::inflect::{InflectionExpander, InflectionSet};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, ValueEnum)]
pub enum MatchStrategy {
    #[value(name = "exact")]
    #[serde(rename = "exact")]
    ExactLemma,
    #[default]
    #[value(name = "inflection")]
    #[serde(rename = "inflection")]
    InflectionExpansion,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MatchStrategy::ExactLemma => "exact",
            MatchStrategy::InflectionExpansion => "inflection",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormCount {
    pub form: String,
    pub count: u64,
}

/// Matching forms and their counts, most frequent first, ties by form.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResult {
    forms: Vec<FormCount>,
}

impl QueryResult {
    fn from_counts(counts: BTreeMap<String, u64>) -> Self {
        let mut forms: Vec<FormCount> = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(form, count)| FormCount { form, count })
            .collect();
        // Stable sort keeps the map's alphabetical order among equal counts.
        forms.sort_by(|a, b| b.count.cmp(&a.count));
        Self { forms }
    }

    pub fn forms(&self) -> &[FormCount] {
        &self.forms
    }

    pub fn count_of(&self, form: &str) -> Option<u64> {
        self.forms.iter().find(|f| f.form == form).map(|f| f.count)
    }

    pub fn total(&self) -> u64 {
        self.forms.iter().map(|f| f.count).sum()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// A query word prepared once and matched against any number of indexes.
#[derive(Clone, Debug)]
pub struct PreparedQuery {
    word: String,
    /// Forms to look up by surface; `None` for lemma matching.
    forms: Option<InflectionSet>,
}

impl PreparedQuery {
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[derive(Clone, Copy)]
pub struct LookupEngine<'r> {
    strategy: MatchStrategy,
    expander: InflectionExpander<'r>,
}

impl<'r> LookupEngine<'r> {
    pub fn new(strategy: MatchStrategy, expander: InflectionExpander<'r>) -> Self {
        Self { strategy, expander }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Trim and lowercase `word`, expanding it when the strategy needs forms.
    pub fn prepare(&self, word: &str) -> PreparedQuery {
        let word = word.trim().to_lowercase();
        let forms = match self.strategy {
            MatchStrategy::ExactLemma => None,
            MatchStrategy::InflectionExpansion => {
                let mut forms = self.expander.expand(&word);
                forms.insert(word.clone());
                Some(forms)
            }
        };
        PreparedQuery { word, forms }
    }

    pub fn lookup(&self, query: &PreparedQuery, index: &FrequencyIndex) -> QueryResult {
        let counts: BTreeMap<String, u64> = match &query.forms {
            None => index
                .surfaces_of(&query.word)
                .map(|(surface, count)| (surface.to_string(), count))
                .collect(),
            Some(forms) => forms
                .iter()
                .map(|form| (form.clone(), index.surface_count(form)))
                .collect(),
        };
        QueryResult::from_counts(counts)
    }

    pub fn query(&self, word: &str, index: &FrequencyIndex) -> QueryResult {
        self.lookup(&self.prepare(word), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_count_then_form() {
        let result = QueryResult::from_counts(BTreeMap::from([
            ("runs".to_string(), 2),
            ("ran".to_string(), 5),
            ("run".to_string(), 2),
            ("running".to_string(), 0),
        ]));
        let forms: Vec<(&str, u64)> = result
            .forms()
            .iter()
            .map(|f| (f.form.as_str(), f.count))
            .collect();
        assert_eq!(forms, [("ran", 5), ("run", 2), ("runs", 2)]);
        assert_eq!(result.total(), 9);
        assert_eq!(result.count_of("running"), None);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::InflectionExpansion);
        assert_eq!(MatchStrategy::ExactLemma.to_string(), "exact");
        assert_eq!(
            MatchStrategy::from_str("inflection", false),
            Ok(MatchStrategy::InflectionExpansion)
        );
        assert_eq!(
            serde_json::to_string(&MatchStrategy::ExactLemma).unwrap(),
            r#""exact""#
        );
    }

    #[test]
    fn serializes_as_list() {
        let result = QueryResult::from_counts(BTreeMap::from([("went".to_string(), 1)]));
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"[{"form":"went","count":1}]"#
        );
    }
}
