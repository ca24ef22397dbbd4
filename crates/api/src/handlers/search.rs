use serde::{Deserialize, Serialize};
use typed_wrapper_core::{Outcome, PathParams, ResponseHandle, WrapperRequest};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub keyword: String,
}

/// GET /api/v1/search?q=
pub async fn search(
    req: WrapperRequest<PathParams, (), SearchQuery>,
    _res: ResponseHandle,
) -> AppResult<Outcome<SearchResult>> {
    Ok(Outcome::ok(SearchResult {
        keyword: req.query.q,
    }))
}
