//! Registering wrapped handlers with axum.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::handler::Handler;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use typed_wrapper_core::{
    AsyncWrapper, Outcome, PathParams, QueryParams, ResponseHandle, ResponseWriter,
    WrapperRequest,
};

use crate::extract::extract_request;

/// A wrapped handler that axum can route to.
///
/// Created by [`async_wrapper`]. On success the response is the
/// `{ "success": true, "data"?: ... }` envelope with the outcome's status;
/// on failure it is whatever the handler's error renders through
/// [`IntoResponse`].
pub struct AsyncHandler<F, P = PathParams, B = serde_json::Value, Q = QueryParams> {
    inner: Arc<AsyncWrapper<F, P, B, Q>>,
}

impl<F, P, B, Q> Clone for AsyncHandler<F, P, B, Q> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Wrap an async handler so it can be passed to `get`, `post` and friends.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct UserParams {
///     id: String,
/// }
///
/// async fn get_user(
///     req: WrapperRequest<UserParams>,
///     _res: ResponseHandle,
/// ) -> AppResult<Outcome<User>> {
///     Ok(Outcome::ok(User { user_id: req.params.id }))
/// }
///
/// Router::new().route("/user/{id}", get(async_wrapper(get_user)));
/// ```
pub fn async_wrapper<F, Fut, P, B, Q, T, E>(handler: F) -> AsyncHandler<F, P, B, Q>
where
    F: Fn(WrapperRequest<P, B, Q>, ResponseHandle) -> Fut,
    Fut: Future<Output = Result<Outcome<T>, E>>,
{
    AsyncHandler {
        inner: Arc::new(typed_wrapper_core::async_wrapper(handler)),
    }
}

/// Marker distinguishing the wrapper's [`Handler`] impl from axum's own.
#[doc(hidden)]
pub enum WrapperMarker {}

impl<F, Fut, P, B, Q, T, E, S> Handler<(WrapperMarker,), S> for AsyncHandler<F, P, B, Q>
where
    F: Fn(WrapperRequest<P, B, Q>, ResponseHandle) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Outcome<T>, E>> + Send + 'static,
    P: DeserializeOwned + Send + 'static,
    B: DeserializeOwned + Send + 'static,
    Q: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
    E: IntoResponse + Send + 'static,
    S: Clone + Send + Sync + 'static,
{
    type Future = Pin<Box<dyn Future<Output = Response> + Send>>;

    fn call(self, req: Request, state: S) -> Self::Future {
        Box::pin(async move {
            let request = match extract_request::<P, B, Q, S>(req, &state).await {
                Ok(request) => request,
                Err(rejection) => {
                    tracing::debug!(%rejection, "Request rejected before handler");
                    return rejection.into_response();
                }
            };

            let mut writer = AxumResponseWriter::default();
            let mut failure = None;

            self.inner
                .call(request, &mut writer, |error: E| {
                    failure = Some(error.into_response());
                })
                .await;

            match failure {
                Some(response) => response,
                None => writer.into_response(),
            }
        })
    }
}

/// [`ResponseWriter`] that collects status, headers and a JSON body and
/// turns them into an axum [`Response`].
#[derive(Debug, Default)]
pub struct AxumResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Option<Result<Vec<u8>, serde_json::Error>>,
}

impl ResponseWriter for AxumResponseWriter {
    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn set_headers(&mut self, headers: HeaderMap) {
        self.headers.extend(headers);
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, body: &T) {
        self.body = Some(serde_json::to_vec(body));
    }
}

impl IntoResponse for AxumResponseWriter {
    fn into_response(self) -> Response {
        let status = self.status.unwrap_or(StatusCode::OK);

        let mut response = match self.body {
            Some(Ok(bytes)) => (
                status,
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                bytes,
            )
                .into_response(),
            Some(Err(err)) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    })),
                )
                    .into_response();
            }
            None => status.into_response(),
        };

        response.headers_mut().extend(self.headers);
        response
    }
}
