use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State as AxumState, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{error::AppError, state::State};

pub const READY_MESSAGE: &str = "Server is ready";

#[derive(Deserialize)]
pub struct CardQuery {
    category: Option<String>,
}

pub async fn ready_handler() -> impl IntoResponse {
    (StatusCode::OK, READY_MESSAGE)
}

pub async fn jokes_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    Json(state.daily.clone())
}

pub async fn cards_handler(
    AxumState(state): AxumState<Arc<State>>,
    query: Result<Query<CardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|e| AppError::MalformedQuery(e.body_text()))?;

    let category = query
        .category
        .as_deref()
        .filter(|category| !category.trim().is_empty());
    let cards = state.bank.cards(category);

    debug!("Serving {} cards for {category:?}", cards.len());

    Ok(Json(cards))
}

pub async fn categories_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    Json(state.bank.categories())
}
