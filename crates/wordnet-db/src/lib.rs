//! Load the lemma and synset tables of a WordNet dictionary.
//!
//! Only what lemmatization and synonym lookup need is kept: which lemmas
//! exist for each part of speech, the synsets a lemma belongs to, and each
//! synset's member words and gloss definition. Callers choose between
//! memory-mapped files and owned buffers via [`LoadMode`]; the backing bytes
//! are released once parsing finishes.
//!
//! # Example
//! ```no_run
//! use wordnet_db::{LoadMode, WordNet};
//! use wordnet_types::Pos;
//!
//! # fn main() -> anyhow::Result<()> {
//! let wn = WordNet::load_with_mode("/path/to/wordnet", LoadMode::Mmap)?;
//! assert!(wn.lemma_exists(Pos::Verb, "run"));
//!
//! for sid in wn.synsets_for_lemma(Pos::Noun, "dog") {
//!     let syn = wn.get_synset(*sid).unwrap();
//!     println!("{}: {}", syn.words.join(", "), syn.definition);
//! }
//! # Ok(()) }
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use memmap2::Mmap;
use wordnet_types::{Pos, Synset, SynsetId};

/// Strategy for loading dictionary files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each WordNet file.
    Mmap,
    /// Read each file into an owned buffer (portable fallback).
    Owned,
}

impl LoadMode {
    /// Parse `mmap`/`owned`, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mmap" => Some(LoadMode::Mmap),
            "owned" => Some(LoadMode::Owned),
            _ => None,
        }
    }
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

struct SynsetData {
    words: Vec<String>,
    definition: String,
}

/// Lemma and synset tables of a WordNet dictionary. The default value is an
/// empty dictionary.
#[derive(Default)]
pub struct WordNet {
    lemma_to_synsets: HashMap<(Pos, String), Vec<SynsetId>>,
    synsets: HashMap<SynsetId, SynsetData>,
}

impl WordNet {
    /// Load WordNet from a directory containing `data.*` and `index.*` files.
    ///
    /// Defaults to memory-mapping the source files.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(dict_dir, LoadMode::Mmap)
    }

    /// Load WordNet choosing between mmap and owned buffers at runtime.
    pub fn load_with_mode(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        for pos in Pos::ALL {
            for prefix in ["index", "data"] {
                let path = dir.join(format!("{prefix}.{}", pos.file_suffix()));
                if !path.exists() {
                    bail!("missing required WordNet file: {}", path.display());
                }
            }
        }

        let mut lemma_to_synsets = HashMap::new();
        let mut synsets = HashMap::new();
        for pos in Pos::ALL {
            let index_path = dir.join(format!("index.{}", pos.file_suffix()));
            let index = load_file(&index_path, mode)?;
            parse_index(index.as_slice(), &index_path, pos, &mut lemma_to_synsets)?;

            let data_path = dir.join(format!("data.{}", pos.file_suffix()));
            let data = load_file(&data_path, mode)?;
            parse_data(data.as_slice(), &data_path, pos, &mut synsets)?;
        }

        Ok(Self {
            lemma_to_synsets,
            synsets,
        })
    }

    /// Check whether a lemma exists for the given POS according to index files.
    pub fn lemma_exists(&self, pos: Pos, lemma: &str) -> bool {
        self.lemma_to_synsets
            .contains_key(&(pos, normalize_lemma(lemma)))
    }

    /// Parts of speech under which `lemma` is indexed, in [`Pos::ALL`] order.
    pub fn pos_of(&self, lemma: &str) -> Vec<Pos> {
        let key = normalize_lemma(lemma);
        Pos::ALL
            .into_iter()
            .filter(|pos| self.lemma_to_synsets.contains_key(&(*pos, key.clone())))
            .collect()
    }

    /// Return the synsets associated with a lemma, or an empty slice.
    pub fn synsets_for_lemma(&self, pos: Pos, lemma: &str) -> &[SynsetId] {
        self.lemma_to_synsets
            .get(&(pos, normalize_lemma(lemma)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fetch a `Synset` by id if loaded.
    pub fn get_synset(&self, id: SynsetId) -> Option<Synset<'_>> {
        self.synsets.get(&id).map(|data| Synset {
            id,
            words: data.words.iter().map(String::as_str).collect(),
            definition: data.definition.as_str(),
        })
    }

    /// Number of lemma keys tracked across all parts of speech.
    pub fn lemma_count(&self) -> usize {
        self.lemma_to_synsets.len()
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    match mode {
        LoadMode::Mmap => unsafe { Mmap::map(&file) }
            .map(Buffer::Mmap)
            .with_context(|| format!("mmap {}", path.display())),
        LoadMode::Owned => {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

/// Yield `(line number, text)` for every record line, skipping the license
/// header (lines starting with whitespace) and blank lines.
fn records<'a>(bytes: &'a [u8], path: &'a Path) -> impl Iterator<Item = Result<(usize, &'a str)>> {
    bytes
        .split(|b| *b == b'\n')
        .enumerate()
        .filter_map(move |(lineno, raw)| {
            let line = raw.strip_suffix(b"\r").unwrap_or(raw);
            if line.is_empty() || matches!(line.first(), Some(b' ' | b'\t')) {
                return None;
            }
            Some(
                std::str::from_utf8(line)
                    .map(|text| (lineno + 1, text))
                    .with_context(|| format!("{}:{} is not valid utf8", path.display(), lineno + 1)),
            )
        })
}

fn parse_index(
    bytes: &[u8],
    path: &Path,
    pos: Pos,
    lemma_to_synsets: &mut HashMap<(Pos, String), Vec<SynsetId>>,
) -> Result<()> {
    for record in records(bytes, path) {
        let (lineno, line) = record?;
        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        if tokens.len() < 6 {
            bail!("{}:{} malformed index line", path.display(), lineno);
        }

        let synset_cnt: usize = tokens[2]
            .parse()
            .with_context(|| format!("{}:{} synset_cnt", path.display(), lineno))?;
        let p_cnt: usize = tokens[3]
            .parse()
            .with_context(|| format!("{}:{} p_cnt", path.display(), lineno))?;
        // pointer symbols, then sense_cnt and tagsense_cnt
        let offsets_start = 4 + p_cnt + 2;
        if tokens.len() != offsets_start + synset_cnt {
            bail!(
                "{}:{} synset_cnt mismatch (expected {}, got {})",
                path.display(),
                lineno,
                synset_cnt,
                tokens.len().saturating_sub(offsets_start)
            );
        }

        let ids = tokens[offsets_start..]
            .iter()
            .map(|t| {
                t.parse::<u32>()
                    .map(|offset| SynsetId { pos, offset })
                    .with_context(|| format!("{}:{} synset offset", path.display(), lineno))
            })
            .collect::<Result<Vec<_>>>()?;
        lemma_to_synsets.insert((pos, normalize_lemma(tokens[0])), ids);
    }
    Ok(())
}

fn parse_data(
    bytes: &[u8],
    path: &Path,
    pos: Pos,
    synsets: &mut HashMap<SynsetId, SynsetData>,
) -> Result<()> {
    for record in records(bytes, path) {
        let (lineno, line) = record?;
        let (left, gloss) = line.split_once('|').unwrap_or((line, ""));
        let tokens: Vec<&str> = left.split_ascii_whitespace().collect();
        if tokens.len() < 4 {
            bail!("{}:{} malformed data line", path.display(), lineno);
        }

        let offset: u32 = tokens[0]
            .parse()
            .with_context(|| format!("{}:{} offset", path.display(), lineno))?;
        let w_cnt = usize::from_str_radix(tokens[3], 16)
            .with_context(|| format!("{}:{} w_cnt", path.display(), lineno))?;
        if tokens.len() < 4 + w_cnt * 2 {
            bail!("{}:{} not enough word/lex_id pairs", path.display(), lineno);
        }

        let words = tokens[4..4 + w_cnt * 2]
            .iter()
            .step_by(2)
            .map(|w| strip_adj_marker(w).to_string())
            .collect();
        synsets.insert(
            SynsetId { pos, offset },
            SynsetData {
                words,
                definition: gloss_definition(gloss).to_string(),
            },
        );
    }
    Ok(())
}

/// Adjective words may carry a syntactic marker: `galore(ip)`, `big(a)`.
fn strip_adj_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if word.ends_with(')') => &word[..idx],
        _ => word,
    }
}

/// The definition is the gloss up to the first `;` outside quoted examples.
fn gloss_definition(gloss: &str) -> &str {
    let trimmed = gloss.trim();
    let mut in_quote = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '"' => in_quote = !in_quote,
            ';' if !in_quote => return trimmed[..idx].trim_end(),
            _ => {}
        }
    }
    trimmed
}

fn normalize_lemma(text: &str) -> String {
    text.trim().to_ascii_lowercase().replace(' ', "_")
}

/// Default location of a dictionary shipped next to the binary.
pub fn default_dict_dir(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.join("index.noun").exists())
}
