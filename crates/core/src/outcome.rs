//! The value a wrapped handler resolves to on success.

use http::StatusCode;

/// Successful result of a wrapped handler: a status code and an optional
/// payload.
///
/// `data` is either present (`Some`) or absent (`None`). Only a present
/// payload is ever written into the response envelope; there is no third
/// "present but undefined" state.
///
/// `T` defaults to `()` so handlers that never return data can be typed as
/// `Result<Outcome, E>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    status_code: StatusCode,
    data: Option<T>,
}

impl<T> Outcome<T> {
    /// An outcome carrying `data` with the given status.
    pub fn with_data(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code,
            data: Some(data),
        }
    }

    /// `200 OK` with `data`.
    pub fn ok(data: T) -> Self {
        Self::with_data(StatusCode::OK, data)
    }

    /// `201 Created` with `data`.
    pub fn created(data: T) -> Self {
        Self::with_data(StatusCode::CREATED, data)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn into_parts(self) -> (StatusCode, Option<T>) {
        (self.status_code, self.data)
    }
}

impl Outcome<()> {
    /// An outcome with no payload. The envelope will be `{"success": true}`.
    pub fn empty(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: None,
        }
    }

    /// `204 No Content` with no payload.
    pub fn no_content() -> Self {
        Self::empty(StatusCode::NO_CONTENT)
    }
}
