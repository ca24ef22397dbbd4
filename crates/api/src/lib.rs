//! axum binding for the typed async wrapper, plus a demo server.
//!
//! [`async_wrapper`] turns an async handler returning
//! `Result<Outcome<T>, E>` into an axum [`Handler`](axum::handler::Handler):
//! successful outcomes become `{ "success": true, "data"?: ... }` responses,
//! and errors are rendered through their own [`IntoResponse`](axum::response::IntoResponse).

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod wrapper;

pub use typed_wrapper_core::{
    Outcome, PathParams, QueryParams, RequestShape, ResponseHandle, Shape, ShapedRequest,
    WrapperRequest,
};
pub use wrapper::{async_wrapper, AsyncHandler, AxumResponseWriter};
