use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, AUCTION_PAGES, DEFAULT_API_KEY, HYPIXEL};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn authed(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("API-Key", DEFAULT_API_KEY.to_string())
        .body(String::new())
        .unwrap()
}

fn anonymous(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_key_is_forbidden() {
    let resp = app(DEFAULT_API_KEY).oneshot(anonymous("/key")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["cause"], "API key is missing");
}

#[tokio::test]
async fn wrong_key_is_forbidden() {
    let req = Request::builder()
        .uri("/boosters")
        .header("API-Key", "00000000000000000000000000000000")
        .body(String::new())
        .unwrap();
    let resp = app(DEFAULT_API_KEY).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["cause"], "Invalid API key");
}

// --- player ---

#[tokio::test]
async fn player_by_undashed_uuid() {
    let uri = format!("/player?uuid={}", HYPIXEL.simple());
    let resp = app(DEFAULT_API_KEY).oneshot(authed(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["player"]["displayname"], "hypixel");
}

#[tokio::test]
async fn unknown_player_is_null() {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(authed("/player?uuid=00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["player"].is_null());
}

#[tokio::test]
async fn player_without_params_is_unsuccessful() {
    let resp = app(DEFAULT_API_KEY).oneshot(authed("/player")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["cause"], "Missing uuid field");
}

#[tokio::test]
async fn player_by_name() {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(authed("/player?name=hypixel"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["player"]["uuid"], HYPIXEL.simple().to_string());
}

// --- auctions ---

#[tokio::test]
async fn auctions_are_paged() {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(authed("/skyblock/auctions?page=1"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], AUCTION_PAGES);
    assert_eq!(body["auctions"].as_array().unwrap().len(), 2);

    let uri = format!("/skyblock/auctions?page={AUCTION_PAGES}");
    let resp = app(DEFAULT_API_KEY).oneshot(authed(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- resources ---

#[tokio::test]
async fn resources_need_no_key() {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(anonymous("/resources/skyblock/collections"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["collections"]["FARMING"]["name"], "Farming");
}

#[tokio::test]
async fn unknown_resource_is_not_found() {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(anonymous("/resources/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["cause"], "Unknown resource");
}

// --- key usage ---

#[tokio::test]
async fn key_counts_authenticated_queries() {
    use tower::Service;

    let mut app = app(DEFAULT_API_KEY).into_service();

    for _ in 0..2 {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(authed("/counts"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // rejected requests are not counted
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(anonymous("/counts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authed("/key"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["record"]["totalQueries"], 3);
    assert_eq!(body["record"]["key"], DEFAULT_API_KEY.to_string());
}
