//! Example: an autocomplete prompt over a word list.
//!
//! Loads a word list (a JSON object of word → weight, or a text file with one word per
//! line) and then reads commands from stdin, one per line:
//!
//! - `+word` inserts a word
//! - `-word` removes a word
//! - anything else is a prefix; its suggestions are printed as a JSON array
//!
//! Run with: cargo run --example suggest -- words.json
//! (or set LIBTRIE_WORDS; RUST_LOG=debug shows what the trie is doing)

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use libtrie::Trie;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load(path: &Path) -> Result<Trie> {
    let trie = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Trie::from_json_file(path),
        _ => Trie::from_file(path),
    };
    trie.with_context(|| format!("error loading {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("LIBTRIE_WORDS").ok())
        .context("usage: suggest <words.json|words.txt> (or set LIBTRIE_WORDS)")?;
    let mut trie = load(Path::new(&path))?;
    info!(
        path = %path,
        words = trie.len(),
        nodes = trie.node_count(),
        "finished inserting all words"
    );

    let mut out = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some(word) = line.strip_prefix('+') {
            if trie.insert(word) {
                info!(word = word.trim(), "inserted");
            }
        } else if let Some(word) = line.strip_prefix('-') {
            match trie.remove(word) {
                Ok(removal) => info!(word = word.trim(), "{removal}"),
                Err(e) => warn!(word = word.trim(), "{e}"),
            }
        } else {
            serde_json::to_writer(&mut out, &trie.search(&line))?;
            writeln!(out)?;
            out.flush()?;
        }
    }
    Ok(())
}
