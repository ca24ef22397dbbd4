//! Typed async wrapper core.
//!
//! Lets request handlers be written as async functions returning
//! `Result<Outcome<T>, E>` instead of writing to the response and forwarding
//! errors by hand. The wrapper turns a successful [`Outcome`] into a
//! `{ "success": true, "data"?: ... }` [`Envelope`] and hands every error,
//! unchanged, to a [`FailureSink`].
//!
//! This crate is framework-agnostic: the response side is the
//! [`ResponseWriter`] trait and the failure side is [`FailureSink`]. The
//! `typed-wrapper-api` crate binds both to axum.

pub mod envelope;
pub mod outcome;
pub mod request;
pub mod response;
pub mod sink;
pub mod wrapper;

pub use envelope::Envelope;
pub use outcome::Outcome;
pub use request::{PathParams, QueryParams, RequestShape, Shape, ShapedRequest, WrapperRequest};
pub use response::{ResponseHandle, ResponseWriter};
pub use sink::FailureSink;
pub use wrapper::{async_wrapper, AsyncWrapper};
