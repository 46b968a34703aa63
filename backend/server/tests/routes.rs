use std::fs;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bank::{get_bank, jokes::Bank};
use serde_json::Value;
use server::{app, config::Config, routes::READY_MESSAGE, state::State};
use tempfile::TempDir;
use tower::ServiceExt;

fn router() -> Router {
    app(State::with_bank(Config::default(), get_bank().unwrap()))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> Value {
    let (status, body) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK);

    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn readiness_text() {
    let (status, body) = get(router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, READY_MESSAGE.as_bytes());
}

#[tokio::test]
async fn daily_jokes_are_fixed() {
    let json = get_json(router(), "/api/jokes").await;
    let jokes = json.as_array().unwrap();

    assert_eq!(jokes.len(), 10);
    for (index, joke) in jokes.iter().enumerate() {
        assert_eq!(joke["id"], index as u64 + 1);
        assert!(!joke["joke"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn cards_filtered_by_category() {
    let bank = Bank::from_json(
        r#"{ "cards": [
            { "setup": "a", "punchline": "b", "category": "food" },
            { "setup": "c", "punchline": "d", "category": "animal" }
        ] }"#,
    )
    .unwrap();
    let router = app(State::with_bank(Config::default(), bank));

    let all = get_json(router.clone(), "/api/cards").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let food = get_json(router.clone(), "/api/cards?category=Food").await;
    assert_eq!(food.as_array().unwrap().len(), 1);
    assert_eq!(food[0]["setup"], "a");
    assert_eq!(food[0]["category"], "food");

    let blank = get_json(router.clone(), "/api/cards?category=").await;
    assert_eq!(blank.as_array().unwrap().len(), 2);

    let unknown = get_json(router, "/api/cards?category=pirate").await;
    assert!(unknown.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_category_is_bad_request() {
    let (status, _) = get(router(), "/api/cards?category=a&category=b").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_listed() {
    let json = get_json(router(), "/api/categories").await;
    let categories = json.as_array().unwrap();

    assert!(!categories.is_empty());
    assert!(categories.iter().any(|category| category == "nerdy"));
}

#[tokio::test]
async fn static_bundle_is_fallback() {
    let dist = TempDir::new().unwrap();
    fs::write(dist.path().join("app.js"), "console.log('jokes')").unwrap();

    let config = Config {
        static_dir: dist.path().to_path_buf(),
        ..Config::default()
    };
    let router = app(State::with_bank(config, get_bank().unwrap()));

    let (status, body) = get(router.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('jokes')");

    let (status, _) = get(router, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
