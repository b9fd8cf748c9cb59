use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use wordnet_db::{LoadMode, WordNet};
use wordnet_morphy::Morphy;
use wordnet_types::Pos;

const USAGE: &str =
    "usage: cargo run -p wordnet-morphy --example lookup -- <dict-dir> [--demo | <word>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let dict_dir = args.next().map(PathBuf::from).context(USAGE)?;
    let words: Vec<String> = match (args.next(), args.next()) {
        (Some(arg), None) if arg == "--demo" => ["running", "leaves", "went", "better", "children"]
            .into_iter()
            .map(String::from)
            .collect(),
        (Some(arg), None) => vec![arg],
        (None, _) => bail!(USAGE),
        (Some(_), Some(_)) => bail!("too many arguments"),
    };

    let wn = WordNet::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet from {}", dict_dir.display()))?;
    let morph = Morphy::load(&dict_dir)
        .with_context(|| format!("loading exceptions from {}", dict_dir.display()))?;
    let exists = |p: Pos, lemma: &str| wn.lemma_exists(p, lemma);

    println!("Dictionary: {}", dict_dir.display());

    for word in words {
        println!("\nSurface: {}", word);
        for pos in Pos::ALL {
            let candidates = morph.lemmas_for(pos, &word, exists);
            if candidates.is_empty() {
                continue;
            }
            println!("  {pos}:");
            for cand in &candidates {
                println!("    {:<10} [{:?}]", cand.lemma, cand.source);
            }
            let lemma = morph.lemmatize(pos, &word, exists);
            let forms: Vec<String> = morph
                .inflections_for(pos, &lemma)
                .into_iter()
                .map(|i| i.form)
                .collect();
            println!("    forms of {lemma}: {}", forms.join(", "));
        }
    }

    Ok(())
}
