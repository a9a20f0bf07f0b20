//! Endpoint tests for `POST /api/v1/outfits/suggest`, with the gateway
//! stubbed by wiremock.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUGGEST_URI: &str = "/api/v1/outfits/suggest";

fn three_items() -> Value {
    json!([
        { "id": "item-1", "name": "White Tee", "category": "Top",
          "dress_code": "Casual", "color": "White" },
        { "id": "item-2", "name": "Blue Jeans", "category": "Bottom",
          "dress_code": "Casual", "color": "Blue" },
        { "id": "item-3", "name": "Sneakers", "category": "Shoes",
          "dress_code": "Casual" },
    ])
}

fn suggest_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(SUGGEST_URI)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn gateway_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [ { "message": { "role": "assistant", "content": content } } ]
    }))
}

#[tokio::test]
async fn parsed_model_reply_is_returned_verbatim() {
    let server = MockServer::start().await;
    let suggestion =
        r#"{"outfit":["item-1","item-2","item-3"],"reasoning":"Clean casual look.","styling_tips":"Roll the cuffs."}"#;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(gateway_reply(suggestion))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": three_items(),
            "occasion": "Casual day out",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::from_str::<Value>(suggestion).expect("suggestion json")
    );
}

#[tokio::test]
async fn free_text_reply_falls_back_deterministically() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(gateway_reply("Wear the tee with the jeans."))
        .mount(&server)
        .await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": three_items(),
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["outfit"], json!(["item-1", "item-2", "item-3"]));
    assert_eq!(body["reasoning"], "Wear the tee with the jeans.");
    assert_eq!(
        body["styling_tips"],
        "Mix and match these pieces for a great look!"
    );
}

#[tokio::test]
async fn too_few_items_is_400_without_gateway_call() {
    let server = MockServer::start().await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": [
                { "id": "item-1", "name": "White Tee", "category": "Top",
                  "dress_code": "Casual" },
            ],
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "At least 3 items are required");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty(), "validation failures must not hit the gateway");
}

#[tokio::test]
async fn item_missing_a_field_is_400_invalid_structure() {
    let server = MockServer::start().await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": [
                { "name": "White Tee", "category": "Top", "dress_code": "Casual" },
                { "id": "item-2", "name": "Blue Jeans", "category": "Bottom",
                  "dress_code": "Casual" },
                { "id": "item-3", "name": "Sneakers", "category": "Shoes",
                  "dress_code": "Casual" },
            ],
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Invalid item data structure");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty(), "malformed items must not hit the gateway");
}

#[tokio::test]
async fn non_string_field_is_400_with_json_envelope() {
    let server = MockServer::start().await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": [
                { "id": 5, "name": "White Tee", "category": "Top",
                  "dress_code": "Casual" },
            ],
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].is_string(), "error detail must be in the envelope");
}

#[tokio::test]
async fn missing_occasion_is_400() {
    let server = MockServer::start().await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": three_items(),
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Valid occasion is required (max 50 characters)");
}

#[tokio::test]
async fn missing_credential_is_500_configuration_error() {
    let server = MockServer::start().await;

    let app = common::build_test_app(&server.uri(), None);
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": three_items(),
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["code"], "CONFIGURATION_ERROR");
    assert_eq!(body["error"], "STYLIST_API_KEY is not configured");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty(), "no gateway call without a credential");
}

#[tokio::test]
async fn gateway_failure_is_500_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let app = common::build_test_app(&server.uri(), Some("test-key"));
    let response = app
        .router
        .oneshot(suggest_request(json!({
            "items": three_items(),
            "occasion": "Brunch",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn preflight_is_answered_permissively() {
    let app = common::build_test_app("http://127.0.0.1:9", Some("test-key"));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(SUGGEST_URI)
                .header(header::ORIGIN, "https://wardrobe.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(
                    header::ACCESS_CONTROL_REQUEST_HEADERS,
                    "authorization, x-client-info, apikey, content-type",
                )
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let allowed_headers = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    for required in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(
            allowed_headers.contains(required),
            "allow-headers missing {required}: {allowed_headers}"
        );
    }
}
