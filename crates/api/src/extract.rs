//! Building a [`WrapperRequest`] from an axum request.
//!
//! Route params come from [`Path`], the query from [`Query`] and the body is
//! parsed as JSON. Any failure here is a [`WrapperRejection`] and the wrapped
//! handler never runs.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use typed_wrapper_core::WrapperRequest;

/// Why a request could not be turned into the handler's typed view.
#[derive(Debug, thiserror::Error)]
pub enum WrapperRejection {
    #[error("Invalid route parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    #[error("Request body exceeds the configured size limit")]
    PayloadTooLarge,

    #[error("Failed to read request body: {0}")]
    BodyRead(String),
}

impl WrapperRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            WrapperRejection::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            WrapperRejection::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WrapperRejection::InvalidParams(_) => "INVALID_PARAMS",
            WrapperRejection::InvalidQuery(_) => "INVALID_QUERY",
            WrapperRejection::InvalidBody(_) => "INVALID_BODY",
            WrapperRejection::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            WrapperRejection::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            WrapperRejection::BodyRead(_) => "BODY_READ_FAILED",
        }
    }
}

impl IntoResponse for WrapperRejection {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.to_string(),
            "code": self.code(),
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

/// Extract the typed request view.
///
/// - A route without parameters deserializes `P` from an empty map.
/// - An empty body deserializes `B` from JSON `null`, so `Value`,
///   `Option<_>` and `()` bodies accept requests without one.
/// - A non-empty body must be sent as JSON.
pub async fn extract_request<P, B, Q, S>(
    req: Request,
    state: &S,
) -> Result<WrapperRequest<P, B, Q>, WrapperRejection>
where
    P: DeserializeOwned + Send,
    B: DeserializeOwned,
    Q: DeserializeOwned,
    S: Send + Sync,
{
    let (mut parts, body) = req.into_parts();

    let params = match Path::<P>::from_request_parts(&mut parts, state).await {
        Ok(Path(params)) => params,
        Err(PathRejection::MissingPathParams(_)) => {
            serde_json::from_value(Value::Object(Default::default()))
                .map_err(|e| WrapperRejection::InvalidParams(e.to_string()))?
        }
        Err(rejection) => return Err(WrapperRejection::InvalidParams(rejection.body_text())),
    };

    let Query(query) = Query::<Q>::try_from_uri(&parts.uri)
        .map_err(|rejection| WrapperRejection::InvalidQuery(rejection.body_text()))?;

    let method = parts.method.clone();
    let uri = parts.uri.clone();
    let headers = parts.headers.clone();

    let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
        .await
        .map_err(|rejection| {
            // `DefaultBodyLimit` overruns surface as a buffering failure with 413.
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                WrapperRejection::PayloadTooLarge
            } else {
                WrapperRejection::BodyRead(rejection.body_text())
            }
        })?;

    let body = parse_body(&headers, &bytes)?;

    Ok(WrapperRequest::new(params, body, query).with_context(method, uri, headers))
}

fn parse_body<B: DeserializeOwned>(
    headers: &HeaderMap,
    bytes: &[u8],
) -> Result<B, WrapperRejection> {
    if bytes.is_empty() {
        return serde_json::from_value(Value::Null)
            .map_err(|_| WrapperRejection::InvalidBody("missing request body".into()));
    }

    if !is_json_content_type(headers) {
        return Err(WrapperRejection::UnsupportedMediaType);
    }

    serde_json::from_slice(bytes).map_err(|e| WrapperRejection::InvalidBody(e.to_string()))
}

/// `application/json` or any `application/*+json`, ignoring parameters.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
