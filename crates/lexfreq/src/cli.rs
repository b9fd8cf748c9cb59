//! Command-line surface of the `lexfreq` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wordnet_db::{LoadMode, default_dict_dir};

use crate::lookup::MatchStrategy;
use crate::resources::ResourceConfig;
use crate::sources::{Source, SourceArg};

pub const DEFAULT_WORDNET_PATH: &str = "open_english_wordnet_2024/oewn2024";
/// Where `nltk.download("wordnet")` unpacks the dictionary.
pub const DEFAULT_NLTK_WORDNET_PATH: &str = "nltk_data/corpora/wordnet";
pub const DEFAULT_TAGGER_MODEL_PATH: &str = "nltk_data/taggers/averaged_perceptron_tagger_eng";
pub const DEFAULT_GROUP_OUTPUT: &str = "词源分组结果.xlsx";
pub const DEFAULT_WORD_LISTS: [(&str, &str); 2] = [
    ("红宝书", "红宝书词表1.xls"),
    ("恋练有词", "恋练有词.xls"),
];
pub const DEFAULT_CORPORA: [&str; 4] = [
    "（2005-2023）四级合并（UTF8）.txt",
    "（2005-2023）六级合并（UTF8）.txt",
    "1998-2024合并（英一）（UTF8）.txt",
    "2001-2023英二合并（UTF8）.txt",
];

#[derive(Debug, Parser)]
#[command(name = "lexfreq", version)]
#[command(about = "Count every inflected form of a word across word lists and corpora")]
pub struct Cli {
    #[command(flatten)]
    pub resources: ResourceArgs,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default `query` command.
    #[command(flatten)]
    pub query: QueryArgs,
}

impl Cli {
    /// The selected command; `query` when none is named.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Query(self.query))
    }
}

#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// WordNet dictionary directory (index.*, data.*, *.exc).
    #[arg(long, env = "WORDNET_DIR", global = true)]
    pub wordnet_dir: Option<PathBuf>,

    /// How dictionary files are loaded.
    #[arg(
        long,
        env = "WORDNET_LOAD_MODE",
        value_parser = parse_load_mode,
        default_value = "mmap",
        global = true
    )]
    pub wordnet_mode: LoadMode,

    /// Directory holding the averaged-perceptron tagger model.
    #[arg(long, env = "TAGGER_MODEL_DIR", global = true)]
    pub tagger_model: Option<PathBuf>,
}

impl ResourceArgs {
    pub fn resource_config(&self) -> ResourceConfig {
        ResourceConfig {
            wordnet_dir: self.wordnet_dir.clone().unwrap_or_else(default_wordnet_path),
            wordnet_mode: self.wordnet_mode,
            tagger_model_dir: self
                .tagger_model
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TAGGER_MODEL_PATH)),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count a word's forms in each word list and corpus.
    Query(QueryArgs),
    /// Group word-list entries by root and export them as a table.
    Group(GroupArgs),
    /// List WordNet lemmas sharing a synset with a word.
    Synonyms {
        word: String,
    },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Args)]
pub struct QueryArgs {
    /// Word list to search, as LABEL=PATH (repeatable).
    #[arg(long = "word-list", value_name = "LABEL=PATH")]
    pub word_lists: Vec<SourceArg>,

    /// Text corpus to search, as [LABEL=]PATH (repeatable).
    #[arg(long = "corpus", value_name = "[LABEL=]PATH")]
    pub corpora: Vec<SourceArg>,

    #[arg(long, value_enum, default_value_t)]
    pub strategy: MatchStrategy,

    /// Word to look up; prompts on stdin when absent.
    #[arg(long)]
    pub word: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl QueryArgs {
    /// Word lists first, then corpora. Without any source flag the
    /// built-in file set is used.
    pub fn sources(&self) -> Vec<Source> {
        if self.word_lists.is_empty() && self.corpora.is_empty() {
            return DEFAULT_WORD_LISTS
                .iter()
                .map(|(label, path)| Source::word_list(*label, *path))
                .chain(DEFAULT_CORPORA.iter().map(|path| Source::corpus(*path, *path)))
                .collect();
        }
        self.word_lists
            .iter()
            .map(|arg| Source::word_list(arg.label.clone(), arg.path.clone()))
            .chain(
                self.corpora
                    .iter()
                    .map(|arg| Source::corpus(arg.label.clone(), arg.path.clone())),
            )
            .collect()
    }
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Word list to group (repeatable). Defaults to the built-in lists.
    #[arg(long = "word-list", value_name = "PATH")]
    pub word_lists: Vec<PathBuf>,

    /// Output table; `.csv` writes CSV, anything else an xlsx workbook.
    #[arg(long, short, default_value = DEFAULT_GROUP_OUTPUT)]
    pub output: PathBuf,
}

impl GroupArgs {
    pub fn word_lists(&self) -> Vec<PathBuf> {
        if self.word_lists.is_empty() {
            DEFAULT_WORD_LISTS
                .iter()
                .map(|(_, path)| PathBuf::from(path))
                .collect()
        } else {
            self.word_lists.clone()
        }
    }
}

fn parse_load_mode(raw: &str) -> Result<LoadMode, String> {
    LoadMode::parse(raw)
        .ok_or_else(|| format!("unknown load mode `{raw}` (expected mmap or owned)"))
}

fn default_wordnet_path() -> PathBuf {
    default_dict_dir(&[DEFAULT_WORDNET_PATH, DEFAULT_NLTK_WORDNET_PATH])
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDNET_PATH))
}
