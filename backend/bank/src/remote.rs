use tracing::info;

use crate::{BankError, jokes::Bank};

/// Fetches a bank published elsewhere, same JSON layout as the embedded one.
pub async fn get_remote_bank(url: &str) -> Result<Bank, BankError> {
    info!("Fetching remote bank from {url}");

    let response = reqwest::get(url).await?.error_for_status()?;
    let json = response.text().await?;

    let bank = Bank::from_json(&json)?;
    info!("Loaded {} remote cards", bank.cards.len());

    Ok(bank)
}
