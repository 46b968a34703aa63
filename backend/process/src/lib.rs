//! # Joke Processing
//!
//! Imports jokes into `bank.json`, the card bank the server compiles in.
//!
//! ## Input
//! - A JSON list, or `{ "jokes": [...] }` as joke APIs answer
//! - Cards: `{ setup, punchline, type }`, `category` works in place of `type`
//! - One-liners: `{ joke }`, split at the first `?` or `!` into setup and punchline.
//!   Dropped if they don't split
//!
//! ## Rules
//! 1. Categories are sanitized, `"Knock Knock"` becomes `knock-knock`. Missing ones take `--category`.
//!
//! 2. A setup already in the bank is skipped, the bank copy wins.
//!
//! 3. Blank setups or punchlines are skipped.
//!
//! 4. Bank order is kept and new jokes are appended, so the card order users know doesn't shift.
use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bank::{jokes::Bank, read_bank, utils::sanitize_category, write_bank};

pub mod models;
pub mod utils;

use models::ImportFile;
use utils::to_joke;

pub struct Summary {
    pub read: usize,
    pub new_items: usize,
    pub total: usize,
}

/// Merges one input file into the bank, returning jokes read and jokes added.
pub fn import_file(
    bank: &mut Bank,
    input: &Path,
    fallback_category: &str,
) -> Result<(usize, usize)> {
    let json = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let file: ImportFile =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", input.display()))?;

    let raw = file.into_jokes();
    let read = raw.len();

    let jokes: Vec<_> = raw
        .into_iter()
        .filter_map(|raw| to_joke(raw, fallback_category))
        .collect();

    Ok((read, bank.merge(jokes)))
}

pub fn load_jokes(bank_path: &Path, inputs: &[PathBuf], category: &str) -> Result<Summary> {
    let mut bank = if bank_path.exists() {
        read_bank(bank_path)?
    } else {
        Bank::default()
    };

    println!("Loaded Cards: {}", bank.cards.len());
    println!("Loaded Categories: {}\n", bank.categories().len());

    let fallback_category = sanitize_category(category);
    let mut summary = Summary {
        read: 0,
        new_items: 0,
        total: 0,
    };

    for input in inputs {
        let (read, new_items) = import_file(&mut bank, input, &fallback_category)?;

        println!("{}: {read} read, {new_items} new", input.display());

        summary.read += read;
        summary.new_items += new_items;
    }

    summary.total = bank.cards.len();

    if summary.new_items == 0 {
        println!("\nNo new jokes found. Exiting.");
        return Ok(summary);
    }

    println!("\nTotal New Items: {}", summary.new_items);
    println!("Card Verification: {}", summary.total);

    write_bank(bank_path, &bank)?;

    Ok(summary)
}
