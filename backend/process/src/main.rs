use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON files with jokes to import.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[arg(long, default_value = bank::BANK_PATH)]
    bank: PathBuf,

    /// Category for jokes that don't name one.
    #[arg(long, default_value = bank::jokes::DEFAULT_CATEGORY)]
    category: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    process::load_jokes(&args.bank, &args.inputs, &args.category)?;

    Ok(())
}
