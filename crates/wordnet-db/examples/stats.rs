use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordnet_db::{LoadMode, WordNet};
use wordnet_types::Pos;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let dict_dir = args
        .next()
        .map(PathBuf::from)
        .context("usage: cargo run -p wordnet-db --example stats -- <dict-dir> [word...]")?;

    let wn = WordNet::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet from {}", dict_dir.display()))?;

    println!("Dictionary: {}", dict_dir.display());
    println!("Lemma keys: {}", wn.lemma_count());
    println!("Synsets   : {}", wn.synset_count());

    for word in args {
        println!("\n{word}");
        for pos in Pos::ALL {
            for sid in wn.synsets_for_lemma(pos, &word) {
                if let Some(syn) = wn.get_synset(*sid) {
                    println!("  {pos:<4} {} -- {}", syn.words.join(", "), syn.definition);
                }
            }
        }
    }

    Ok(())
}
