use serde::{Deserialize, Serialize};
use typed_wrapper_core::{Outcome, ResponseHandle, WrapperRequest};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
}

/// GET /api/v1/hello/{name}
pub async fn hello(
    req: WrapperRequest<GreetingParams>,
    _res: ResponseHandle,
) -> AppResult<Outcome<Greeting>> {
    Ok(Outcome::ok(Greeting {
        message: format!("Hello, {}!", req.params.name),
    }))
}
