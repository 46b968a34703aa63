use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bank::BankError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Environment misconfigured: {0}")]
    Config(String),

    #[error("Bank unavailable: {0}")]
    Bank(#[from] BankError),

    #[error("Internal error: {0}")]
    InternalError(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedQuery { .. } => StatusCode::BAD_REQUEST,
            AppError::Config { .. } | AppError::Bank { .. } | AppError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
