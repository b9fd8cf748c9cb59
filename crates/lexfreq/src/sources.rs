//! Word lists and corpora: reading them from disk and indexing them.
//!
//! Word lists are spreadsheets (`.xls`, `.xlsx`, `.xlsm`, `.xlsb`, `.ods`),
//! `.csv` files or plain `.txt` files with one entry per line. Only text
//! cells are kept; numbers, dates, booleans, errors and blanks are dropped
//! without complaint. Corpora are plain text, decoded as UTF-8 with invalid
//! bytes replaced.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use calamine::{Data, Reader, open_workbook_auto};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::frequency::FrequencyIndex;
use crate::pipeline::Analyzer;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xls", "xlsx", "xlsm", "xlsb", "ods"];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    WordList,
    Corpus,
}

/// A labelled input file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    pub label: String,
    pub kind: SourceKind,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to parse csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unsupported word list format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl Source {
    pub fn word_list(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            kind: SourceKind::WordList,
            path: path.into(),
        }
    }

    pub fn corpus(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            kind: SourceKind::Corpus,
            path: path.into(),
        }
    }

    /// Text fed to the pipeline for this source.
    pub fn read_text(&self) -> Result<String, IngestError> {
        match self.kind {
            SourceKind::WordList => word_list_text(&self.path),
            SourceKind::Corpus => corpus_text(&self.path),
        }
    }

    pub fn index(&self, analyzer: &Analyzer<'_>) -> Result<FrequencyIndex, IngestError> {
        let start = Instant::now();
        let text = self.read_text()?;
        let index = analyzer.index_text(&text);
        info!(
            "indexed {} '{}' in {} ms: {} tokens, {} lemmas",
            self.kind,
            self.label,
            start.elapsed().as_millis(),
            index.total_tokens(),
            index.lemma_len()
        );
        Ok(index)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SourceKind::WordList => "word list",
            SourceKind::Corpus => "corpus",
        })
    }
}

/// `LABEL=PATH`, or a bare `PATH` labelled by its file stem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceArg {
    pub label: String,
    pub path: PathBuf,
}

impl FromStr for SourceArg {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (label, path) = match raw.split_once('=') {
            Some((label, path)) => (label.trim().to_string(), PathBuf::from(path.trim())),
            None => {
                let path = PathBuf::from(raw.trim());
                let label = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (label, path)
            }
        };
        if path.as_os_str().is_empty() {
            return Err(format!("missing path in source `{raw}`"));
        }
        if label.is_empty() {
            return Err(format!("missing label in source `{raw}`"));
        }
        Ok(Self { label, path })
    }
}

/// Index every source in order. Sources that cannot be read are logged and
/// left out; the rest are still indexed.
pub fn index_sources(
    sources: &[Source],
    analyzer: &Analyzer<'_>,
) -> Vec<(Source, FrequencyIndex)> {
    let mut out = Vec::with_capacity(sources.len());
    for source in sources {
        match source.index(analyzer) {
            Ok(index) => out.push((source.clone(), index)),
            Err(err) => warn!("skipping {} '{}': {err}", source.kind, source.label),
        }
    }
    out
}

/// Raw text cells of a word list, trimmed, in reading order: sheet by sheet,
/// column by column, top to bottom. Blank cells are dropped.
pub fn read_cells(path: &Path) -> Result<Vec<String>, IngestError> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let cells = match ext.as_str() {
        "csv" => read_csv_cells(path)?,
        "txt" => read_txt_cells(path)?,
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => read_workbook_cells(path)?,
        _ => return Err(IngestError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(cells
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect())
}

/// Distinct lowercased entries of a word list, sorted and joined by spaces.
pub fn word_list_text(path: &Path) -> Result<String, IngestError> {
    let words: BTreeSet<String> = read_cells(path)?
        .into_iter()
        .map(|cell| cell.to_lowercase())
        .collect();
    Ok(words.into_iter().collect::<Vec<_>>().join(" "))
}

pub fn corpus_text(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn text_cell(cell: &Data) -> Option<&str> {
    match cell {
        Data::String(text) => Some(text.as_str()),
        _ => None,
    }
}

fn read_workbook_cells(path: &Path) -> Result<Vec<String>, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cells = Vec::new();
    for (_name, range) in workbook.worksheets() {
        for col in 0..range.width() {
            for row in 0..range.height() {
                if let Some(text) = range.get((row, col)).and_then(text_cell) {
                    cells.push(text.to_string());
                }
            }
        }
    }
    Ok(cells)
}

fn read_csv_cells(path: &Path) -> Result<Vec<String>, IngestError> {
    let csv_err = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.map_err(csv_err)?);
    }

    let width = rows.iter().map(csv::StringRecord::len).max().unwrap_or(0);
    let mut cells = Vec::new();
    for col in 0..width {
        cells.extend(rows.iter().filter_map(|row| row.get(col)).map(str::to_string));
    }
    Ok(cells)
}

fn read_txt_cells(path: &Path) -> Result<Vec<String>, IngestError> {
    Ok(corpus_text(path)?.lines().map(str::to_string).collect())
}
