//! Tokenize English text the Penn Treebank way and tag each token with a
//! Penn Treebank part-of-speech tag.
//!
//! ```rust
//! use pos_tagger::tokenize::word_tokenize;
//!
//! assert_eq!(word_tokenize("they don't run."), ["they", "do", "n't", "run", "."]);
//! ```

pub mod perceptron;
pub mod tokenize;

use std::path::PathBuf;

use thiserror::Error;

pub use perceptron::{AveragedPerceptron, PerceptronTagger};
pub use tokenize::word_tokenize;

/// A token and the Penn Treebank tag assigned to it in context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

/// Assigns one tag per token, in order.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("tagger model file not found: {0}")]
    MissingModel(PathBuf),
    #[error("failed to read tagger model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tagger model {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
