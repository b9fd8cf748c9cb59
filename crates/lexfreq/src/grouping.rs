//! Grouping word-list entries by root and exporting the groups as a table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::{info, warn};

use crate::lemmatize::Lemmatizer;
use crate::sources::read_cells;

pub const ROOT_HEADER: &str = "Root Word";
const SHEET_NAME: &str = "Groups";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write workbook {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
    #[error("failed to write csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Words grouped under their root, roots in first-seen order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordGroups {
    groups: Vec<(String, Vec<String>)>,
    by_root: HashMap<String, usize>,
}

impl WordGroups {
    /// Group `words` by `root_of`. Entries with non-ASCII characters or no
    /// ASCII letter are skipped; repeated words within a group are kept once.
    pub fn build<I, S, F>(words: I, root_of: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let mut groups = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_ascii() || !word.chars().any(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            groups.insert(root_of(word), word);
        }
        groups
    }

    fn insert(&mut self, root: String, word: &str) {
        let slot = match self.by_root.get(&root) {
            Some(&slot) => slot,
            None => {
                self.by_root.insert(root.clone(), self.groups.len());
                self.groups.push((root, Vec::new()));
                self.groups.len() - 1
            }
        };
        let members = &mut self.groups[slot].1;
        if !members.iter().any(|m| m == word) {
            members.push(word.to_string());
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(root, words)| (root.as_str(), words.as_slice()))
    }

    pub fn get(&self, root: &str) -> Option<&[String]> {
        self.by_root
            .get(root)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of the largest group.
    pub fn width(&self) -> usize {
        self.groups.iter().map(|(_, words)| words.len()).max().unwrap_or(0)
    }

    /// `Root Word, Word 1 … Word N`, N being the widest group.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(ROOT_HEADER.to_string())
            .chain((1..=self.width()).map(|i| format!("Word {i}")))
            .collect()
    }

    /// One row per group, blank-padded to the header width.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let width = self.width();
        self.groups
            .iter()
            .map(|(root, words)| {
                let mut row = Vec::with_capacity(width + 1);
                row.push(root.clone());
                row.extend(words.iter().cloned());
                row.resize(width + 1, String::new());
                row
            })
            .collect()
    }
}

/// Group the entries of every readable word list by root. Unreadable lists
/// are logged and skipped.
pub fn group_word_lists(paths: &[PathBuf], lemmatizer: &Lemmatizer<'_>) -> WordGroups {
    let mut words = Vec::new();
    for path in paths {
        match read_cells(path) {
            Ok(cells) => words.extend(cells),
            Err(err) => warn!("skipping word list {}: {err}", path.display()),
        }
    }
    let groups = WordGroups::build(&words, |word| lemmatizer.root_of(word));
    info!("grouped {} words under {} roots", words.len(), groups.len());
    groups
}

/// Write `groups` to `path`: CSV for a `.csv` path, an xlsx workbook otherwise.
pub fn export(groups: &WordGroups, path: &Path) -> Result<(), ExportError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        export_csv(groups, path)
    } else {
        export_xlsx(groups, path)
    }
}

fn export_csv(groups: &WordGroups, path: &Path) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(groups.header()).map_err(csv_err)?;
    for row in groups.rows() {
        writer.write_record(&row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn export_xlsx(groups: &WordGroups, path: &Path) -> Result<(), ExportError> {
    let xlsx_err = |source| ExportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

    let rows = std::iter::once(groups.header()).chain(groups.rows());
    for (r, row) in rows.enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let (Ok(r), Ok(c)) = (u32::try_from(r), u16::try_from(c)) else {
                return Err(xlsx_err(XlsxError::RowColumnLimitError));
            };
            sheet.write_string(r, c, cell).map_err(xlsx_err)?;
        }
    }
    workbook.save(path).map_err(xlsx_err)
}
