use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexfreq::cli::{Cli, Command, GroupArgs, OutputFormat, QueryArgs};
use lexfreq::report::{PROMPT, write_json, write_result};
use lexfreq::resources::{self, Resources};
use lexfreq::sources::index_sources;
use lexfreq::{Analyzer, InflectionExpander, Lemmatizer, LookupEngine, grouping, synonyms};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resources.resource_config();
    info!(
        "using wordnet at {} (mode: {:?})",
        config.wordnet_dir.display(),
        config.wordnet_mode
    );
    info!("using tagger model at {}", config.tagger_model_dir.display());
    let resources = resources::init(&config)?;

    match cli.into_command() {
        Command::Query(args) => run_query(resources, &args),
        Command::Group(args) => run_group(resources, &args),
        Command::Synonyms { word } => run_synonyms(resources, &word),
    }
}

fn run_query(resources: &Resources, args: &QueryArgs) -> Result<()> {
    let word = match &args.word {
        Some(word) => word.trim().to_lowercase(),
        None => prompt_word()?,
    };
    if word.is_empty() {
        bail!("no word to look up");
    }

    let engine = LookupEngine::new(args.strategy, InflectionExpander::new(resources));
    let query = engine.prepare(&word);
    info!("looking up '{}' ({} matching)", query.word(), engine.strategy());

    let start = Instant::now();
    let indexed = index_sources(&args.sources(), &Analyzer::new(resources));
    info!(
        "indexed {} sources in {} ms",
        indexed.len(),
        start.elapsed().as_millis()
    );

    let results: Vec<_> = indexed
        .iter()
        .map(|(source, index)| (source, engine.lookup(&query, index)))
        .collect();
    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            for (source, result) in &results {
                write_result(&mut out, source, query.word(), result)?;
            }
        }
        OutputFormat::Json => write_json(
            &mut out,
            query.word(),
            engine.strategy(),
            results.iter().map(|(source, result)| (*source, result)),
        )?,
    }
    out.flush()?;
    Ok(())
}

fn run_group(resources: &Resources, args: &GroupArgs) -> Result<()> {
    let groups = grouping::group_word_lists(&args.word_lists(), &Lemmatizer::new(resources));
    grouping::export(&groups, &args.output)?;
    println!("分组结果已导出到文件: {}", args.output.display());
    Ok(())
}

fn run_synonyms(resources: &Resources, word: &str) -> Result<()> {
    let lemmas = synonyms::synonyms(resources, &word.trim().to_lowercase());
    let mut out = io::stdout().lock();
    for lemma in &lemmas {
        writeln!(out, "{lemma}")?;
    }
    Ok(())
}

fn prompt_word() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read query word from stdin")?;
    Ok(line.trim().to_lowercase())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the report only.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
