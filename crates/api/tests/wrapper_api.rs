//! End-to-end tests for handlers registered through `async_wrapper`.
//!
//! Requests go through the full middleware stack via `tower::ServiceExt`,
//! without a TCP listener.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use common::{body_bytes, body_json, get as get_req, post_empty, post_json};
use serde_json::json;
use tower::ServiceExt;
use typed_wrapper_api::error::AppError;
use typed_wrapper_api::{async_wrapper, Outcome, ResponseHandle, WrapperRequest};

// ---------------------------------------------------------------------------
// Success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hello_returns_envelope_with_data() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/hello/X").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": { "message": "Hello, X!" } })
    );
}

#[tokio::test]
async fn route_params_reach_the_handler() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/user/123").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": { "userId": "123" } })
    );
}

#[tokio::test]
async fn typed_body_is_parsed() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/login",
        json!({ "email": "test@example.com", "password": "secret" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["token"], "test@example.com:secret");
}

#[tokio::test]
async fn typed_query_is_parsed() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/search?q=typescript").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": { "keyword": "typescript" } })
    );
}

#[tokio::test]
async fn struct_payload_is_serialized() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/current-user").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": { "id": "123", "name": "John Doe" } })
    );
}

#[tokio::test]
async fn params_body_and_query_together() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/mix/42?tag=type-safe",
        json!({ "name": "typed-wrapper" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": true,
            "data": { "summary": "typed-wrapper(42) tagged with type-safe" }
        })
    );
}

// ---------------------------------------------------------------------------
// Outcomes without data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_data_outcome_writes_success_only() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/v1/ping").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["x-pong"], "1");
    assert_eq!(body_bytes(response).await, br#"{"success":true}"#);
}

#[tokio::test]
async fn logout_with_token_returns_204() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/logout", json!({ "token": "abc.def.ghi" })).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(response).await, json!({ "success": true }));
}

// ---------------------------------------------------------------------------
// Failure path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn handler_error_is_rendered_by_failure_stage() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/fail").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": "An internal error occurred", "code": "INTERNAL_ERROR" }));
    assert!(json.get("success").is_none());
}

#[tokio::test]
async fn handler_validation_error_is_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/login", json!({ "email": "a@b.c" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Missing credentials");
}

#[tokio::test]
async fn failure_discards_staged_headers() {
    async fn staged_then_fail(
        _req: WrapperRequest,
        res: ResponseHandle,
    ) -> Result<Outcome, AppError> {
        res.insert_header(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("no-store"),
        );
        Err(AppError::NotFound("nothing here".into()))
    }

    let app = Router::new().route("/staged", get(async_wrapper(staged_then_fail)));
    let response = get_req(app, "/staged").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("cache-control").is_none());
}

#[tokio::test]
async fn custom_error_type_controls_failure_response() {
    // Any `IntoResponse` error works as the failure stage.
    #[derive(Debug)]
    struct Teapot(&'static str);

    impl IntoResponse for Teapot {
        fn into_response(self) -> axum::response::Response {
            (StatusCode::IM_A_TEAPOT, axum::Json(json!({ "error": self.0 }))).into_response()
        }
    }

    let app = Router::new().route(
        "/teapot",
        get(async_wrapper(|_req: WrapperRequest, _res| async {
            Err::<Outcome, _>(Teapot("Oops"))
        })),
    );
    let response = get_req(app, "/teapot").await;

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(body_json(response).await, json!({ "error": "Oops" }));
}

// ---------------------------------------------------------------------------
// Status passthrough
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_codes_pass_through() {
    for code in [200u16, 201, 204, 404, 500] {
        let status = StatusCode::from_u16(code).unwrap();
        let app = Router::new().route(
            "/status",
            get(async_wrapper(move |_req: WrapperRequest, _res| async move {
                Ok::<_, AppError>(Outcome::empty(status))
            })),
        );

        let response = get_req(app, "/status").await;

        assert_eq!(response.status().as_u16(), code);
        assert_eq!(body_json(response).await, json!({ "success": true }));
    }
}

// ---------------------------------------------------------------------------
// Extraction rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_query_field_is_rejected() {
    let app = common::build_test_app();
    let response = get_req(app, "/api/v1/search").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_BODY");
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("email=a"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn missing_required_body_is_rejected() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/v1/mix/42?tag=x").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_BODY");
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    // axum's default body limit is 2 MiB; send 3 MiB of otherwise valid JSON.
    let password = "x".repeat(3 * 1024 * 1024);
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/login",
        json!({ "email": "test@example.com", "password": password }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["code"], "PAYLOAD_TOO_LARGE");
}
