use std::sync::Arc;

use bank::{
    get_bank,
    jokes::{Bank, DailyJoke, daily_jokes},
    remote::get_remote_bank,
};

use super::{config::Config, error::AppError};

pub struct State {
    pub bank: Bank,
    pub daily: Vec<DailyJoke>,
    pub config: Config,
}

impl State {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        let bank = match &config.bank_url {
            Some(url) => get_remote_bank(url).await?,
            None => get_bank()?,
        };

        Ok(Self::with_bank(config, bank))
    }

    pub fn with_bank(config: Config, bank: Bank) -> Arc<Self> {
        Arc::new(Self {
            bank,
            daily: daily_jokes(),
            config,
        })
    }
}
