use axum::http::{HeaderName, HeaderValue};
use typed_wrapper_core::{Outcome, ResponseHandle, WrapperRequest};

use crate::error::{AppError, AppResult};

/// Header staged by [`ping`] to show response access from a handler.
pub const PONG_HEADER: &str = "x-pong";

/// POST /api/v1/ping
///
/// 204 with no data.
pub async fn ping(_req: WrapperRequest, res: ResponseHandle) -> AppResult<Outcome> {
    res.insert_header(HeaderName::from_static(PONG_HEADER), HeaderValue::from_static("1"));
    Ok(Outcome::no_content())
}

/// GET /api/v1/fail
///
/// Always fails, exercising the failure path.
pub async fn fail(_req: WrapperRequest, _res: ResponseHandle) -> AppResult<Outcome> {
    Err(AppError::Internal("Oops".into()))
}
