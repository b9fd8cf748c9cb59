//! Process-wide linguistic resources: WordNet, morphy exception lists and
//! the part-of-speech tagger.
//!
//! [`init`] loads them once and hands out a `&'static` handle; everything
//! downstream borrows from it and nothing mutates it afterwards.

use std::path::PathBuf;
use std::time::Instant;

use once_cell::sync::OnceCell;
use pos_tagger::{PerceptronTagger, Tagger, TaggerError};
use thiserror::Error;
use tracing::info;
use wordnet_db::{LoadMode, WordNet};
use wordnet_morphy::Morphy;

static RESOURCES: OnceCell<Resources> = OnceCell::new();

/// Where the resources live on disk.
#[derive(Clone, Debug)]
pub struct ResourceConfig {
    pub wordnet_dir: PathBuf,
    pub wordnet_mode: LoadMode,
    pub tagger_model_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to load WordNet from {path}: {reason}")]
    WordNet { path: PathBuf, reason: String },
    #[error("failed to load morphy exception lists from {path}: {reason}")]
    Morphy { path: PathBuf, reason: String },
    #[error(transparent)]
    Tagger(#[from] TaggerError),
}

pub struct Resources {
    wordnet: WordNet,
    morphy: Morphy,
    tagger: Box<dyn Tagger>,
}

impl Resources {
    pub fn load(config: &ResourceConfig) -> Result<Self, SetupError> {
        let start = Instant::now();
        let wordnet = WordNet::load_with_mode(&config.wordnet_dir, config.wordnet_mode)
            .map_err(|err| SetupError::WordNet {
                path: config.wordnet_dir.clone(),
                reason: format!("{err:#}"),
            })?;
        let morphy = Morphy::load(&config.wordnet_dir).map_err(|err| SetupError::Morphy {
            path: config.wordnet_dir.clone(),
            reason: format!("{err:#}"),
        })?;
        info!(
            "wordnet loaded in {} ms ({} lemmas, {} synsets)",
            start.elapsed().as_millis(),
            wordnet.lemma_count(),
            wordnet.synset_count()
        );

        let start = Instant::now();
        let tagger = PerceptronTagger::load(&config.tagger_model_dir)?;
        info!("tagger loaded in {} ms", start.elapsed().as_millis());

        Ok(Self::from_parts(wordnet, morphy, tagger))
    }

    /// Assemble from already-loaded parts, e.g. a fixture dictionary and a
    /// fixed tagger.
    pub fn from_parts(wordnet: WordNet, morphy: Morphy, tagger: impl Tagger + 'static) -> Self {
        Self {
            wordnet,
            morphy,
            tagger: Box::new(tagger),
        }
    }

    pub fn wordnet(&self) -> &WordNet {
        &self.wordnet
    }

    pub fn morphy(&self) -> &Morphy {
        &self.morphy
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }
}

/// Load the resources on first call; later calls return the same handle and
/// ignore `config`.
pub fn init(config: &ResourceConfig) -> Result<&'static Resources, SetupError> {
    RESOURCES.get_or_try_init(|| Resources::load(config))
}

/// The handle installed by [`init`], if any.
pub fn get() -> Option<&'static Resources> {
    RESOURCES.get()
}
