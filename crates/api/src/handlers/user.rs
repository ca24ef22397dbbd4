use serde::{Deserialize, Serialize};
use typed_wrapper_core::{Outcome, ResponseHandle, WrapperRequest};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MixBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MixQuery {
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub summary: String,
}

/// GET /api/v1/user/{id}
pub async fn get_user(
    req: WrapperRequest<UserParams>,
    _res: ResponseHandle,
) -> AppResult<Outcome<UserRef>> {
    Ok(Outcome::ok(UserRef {
        user_id: req.params.id,
    }))
}

/// GET /api/v1/current-user
pub async fn current_user(
    _req: WrapperRequest,
    _res: ResponseHandle,
) -> AppResult<Outcome<CurrentUser>> {
    Ok(Outcome::ok(CurrentUser {
        id: "123".into(),
        name: "John Doe".into(),
    }))
}

/// POST /api/v1/mix/{id}?tag=
///
/// Uses params, body and query together.
pub async fn mix(
    req: WrapperRequest<UserParams, MixBody, MixQuery>,
    _res: ResponseHandle,
) -> AppResult<Outcome<Summary>> {
    let WrapperRequest {
        params, body, query, ..
    } = req;

    Ok(Outcome::ok(Summary {
        summary: format!("{}({}) tagged with {}", body.name, params.id, query.tag),
    }))
}
