use std::{fs, path::Path};

use thiserror::Error;

pub mod jokes;
pub mod remote;
pub mod utils;

use jokes::Bank;

pub use jokes::daily_jokes;

/// Card bank compiled into the binary, regenerated by the `process` CLI.
const BANK_JSON: &str = include_str!("../../../bank.json");

pub const BANK_PATH: &str = "bank.json";

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Malformed bank: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Bank io: {0}")]
    Io(#[from] std::io::Error),

    #[error("Remote bank: {0}")]
    Remote(#[from] reqwest::Error),
}

pub fn get_bank() -> Result<Bank, BankError> {
    Bank::from_json(BANK_JSON)
}

pub fn read_bank(path: impl AsRef<Path>) -> Result<Bank, BankError> {
    let data = fs::read_to_string(path)?;

    Bank::from_json(&data)
}

pub fn write_bank(path: impl AsRef<Path>, bank: &Bank) -> Result<(), BankError> {
    let mut json = serde_json::to_string_pretty(bank)?;
    json.push('\n');

    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_embedded_bank() {
        let bank = get_bank().unwrap();

        assert!(!bank.cards.is_empty());
        assert!(bank.cards.iter().all(|joke| !joke.setup.is_empty()));
        assert!(bank.cards.iter().all(|joke| !joke.punchline.is_empty()));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");

        let bank = get_bank().unwrap();
        write_bank(&path, &bank).unwrap();

        assert_eq!(read_bank(&path).unwrap(), bank);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_bank("/definitely/not/here/bank.json").unwrap_err();

        assert!(matches!(err, BankError::Io(_)));
    }
}
