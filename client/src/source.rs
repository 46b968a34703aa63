use async_trait::async_trait;
use bank::jokes::{Bank, Joke};
use tracing::{info, warn};

pub const LOAD_ERROR: &str = "Failed to load jokes. Please try again later.";

/// Result of one fetch. A failed fetch is an empty listing carrying the message to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JokeListing {
    pub jokes: Vec<Joke>,
    pub error: Option<String>,
}

impl JokeListing {
    pub fn failed() -> Self {
        Self {
            jokes: Vec::new(),
            error: Some(LOAD_ERROR.to_string()),
        }
    }
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn list_jokes(&self, category: Option<&str>) -> JokeListing;
}

/// Jokes held in memory, the embedded bank for instance.
pub struct StaticSource {
    bank: Bank,
}

impl StaticSource {
    pub fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

#[async_trait]
impl JokeSource for StaticSource {
    async fn list_jokes(&self, category: Option<&str>) -> JokeListing {
        JokeListing {
            jokes: self.bank.cards(category),
            error: None,
        }
    }
}

/// One `GET /api/cards` against a jokes server. No retries.
pub struct RemoteSource {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, category: Option<&str>) -> Result<Vec<Joke>, reqwest::Error> {
        let mut request = self.client.get(format!("{}/api/cards", self.base_url));

        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        request.send().await?.error_for_status()?.json().await
    }
}

#[async_trait]
impl JokeSource for RemoteSource {
    async fn list_jokes(&self, category: Option<&str>) -> JokeListing {
        match self.fetch(category).await {
            Ok(jokes) => {
                info!("Fetched {} jokes from {}", jokes.len(), self.base_url);

                JokeListing { jokes, error: None }
            }
            Err(e) => {
                warn!("Fetching jokes from {} failed: {e}", self.base_url);

                JokeListing::failed()
            }
        }
    }
}
