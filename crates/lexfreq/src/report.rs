//! Rendering query results for the terminal (or as JSON).

use std::io::{self, Write};

use serde::Serialize;

use crate::lookup::{FormCount, MatchStrategy, QueryResult};
use crate::sources::{Source, SourceKind};

pub const PROMPT: &str = "请输入要查找的单词: ";

/// Human-readable lines for one source: a heading plus one line per form,
/// or a single not-found line.
pub fn write_result(
    out: &mut impl Write,
    source: &Source,
    word: &str,
    result: &QueryResult,
) -> io::Result<()> {
    let label = &source.label;
    if result.is_empty() {
        return match source.kind {
            SourceKind::WordList => writeln!(out, "{label}中未收录'{word}'。"),
            SourceKind::Corpus => writeln!(out, "'{label}'中未找到'{word}'的相关词形变换。"),
        };
    }
    match source.kind {
        SourceKind::WordList => writeln!(out, "{label}中'{word}'相关词形变换的出现次数：")?,
        SourceKind::Corpus => writeln!(out, "在'{label}'中'{word}'相关词形变换的出现次数：")?,
    }
    for FormCount { form, count } in result.forms() {
        writeln!(out, "  {form}: {count} 次")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    word: &'a str,
    strategy: MatchStrategy,
    sources: Vec<JsonSource<'a>>,
}

#[derive(Serialize)]
struct JsonSource<'a> {
    label: &'a str,
    kind: SourceKind,
    total: u64,
    forms: &'a QueryResult,
}

/// All per-source results as one JSON document.
pub fn write_json<'a>(
    out: &mut impl Write,
    word: &str,
    strategy: MatchStrategy,
    results: impl IntoIterator<Item = (&'a Source, &'a QueryResult)>,
) -> io::Result<()> {
    let report = JsonReport {
        word,
        strategy,
        sources: results
            .into_iter()
            .map(|(source, result)| JsonSource {
                label: &source.label,
                kind: source.kind,
                total: result.total(),
                forms: result,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
