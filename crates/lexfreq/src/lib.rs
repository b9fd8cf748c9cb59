//! Lemma-indexed word frequency lookup.
//!
//! Sources (vocabulary lists and exam corpora) run through
//! normalize → tokenize → tag → lemmatize and are tallied into a
//! [`FrequencyIndex`]. A [`LookupEngine`] then answers "how often does this
//! word appear, in any of its forms" against each index.
//!
//! ```no_run
//! use lexfreq::resources::{self, ResourceConfig};
//! use lexfreq::{Analyzer, InflectionExpander, LookupEngine, MatchStrategy};
//! use wordnet_db::LoadMode;
//!
//! # fn main() -> anyhow::Result<()> {
//! let resources = resources::init(&ResourceConfig {
//!     wordnet_dir: "/path/to/wordnet".into(),
//!     wordnet_mode: LoadMode::Mmap,
//!     tagger_model_dir: "/path/to/averaged_perceptron_tagger_eng".into(),
//! })?;
//! let index = Analyzer::new(resources).index_text("He went home. She is going too.");
//! let engine = LookupEngine::new(
//!     MatchStrategy::InflectionExpansion,
//!     InflectionExpander::new(resources),
//! );
//! for form in engine.query("go", &index).forms() {
//!     println!("{}: {}", form.form, form.count);
//! }
//! # Ok(()) }
//! ```

pub mod cli;
pub mod frequency;
pub mod grouping;
pub mod inflect;
pub mod lemmatize;
pub mod lookup;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod resources;
pub mod sources;
pub mod synonyms;

pub use frequency::{FrequencyIndex, LemmatizedToken};
pub use grouping::{ExportError, WordGroups};
pub use inflect::{InflectionExpander, InflectionSet};
pub use lemmatize::{Lemmatizer, coarse_pos};
pub use lookup::{FormCount, LookupEngine, MatchStrategy, PreparedQuery, QueryResult};
pub use normalize::normalize;
pub use pipeline::Analyzer;
pub use resources::{ResourceConfig, Resources, SetupError};
pub use sources::{IngestError, Source, SourceKind};
