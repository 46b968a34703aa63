use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid reveal setting {key}: {reason}")]
    Config { key: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}
