//! Login and logout, using named request shapes.

use serde::{Deserialize, Serialize};
use typed_wrapper_core::{Outcome, PathParams, QueryParams, ResponseHandle, Shape, ShapedRequest};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginToken {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutBody {
    #[serde(default)]
    pub token: String,
}

pub type LoginShape = Shape<PathParams, LoginBody, QueryParams>;
pub type LogoutShape = Shape<PathParams, LogoutBody, QueryParams>;

/// POST /api/v1/login
///
/// Echoes the credentials back as a token; rejects empty ones.
pub async fn login(
    req: ShapedRequest<LoginShape>,
    _res: ResponseHandle,
) -> AppResult<Outcome<LoginToken>> {
    let LoginBody { email, password } = req.body;
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Missing credentials".into()));
    }

    tracing::info!(%email, "User logged in");

    Ok(Outcome::ok(LoginToken {
        token: format!("{email}:{password}"),
    }))
}

/// POST /api/v1/logout
pub async fn logout(req: ShapedRequest<LogoutShape>, _res: ResponseHandle) -> AppResult<Outcome> {
    if req.body.token.is_empty() {
        return Err(AppError::BadRequest("Invalid token".into()));
    }

    Ok(Outcome::no_content())
}
