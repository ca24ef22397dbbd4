//! Demo handlers, all written against the typed async wrapper.
//!
//! Each handler takes a [`WrapperRequest`](crate::WrapperRequest) with the
//! shape it needs and returns `AppResult<Outcome<T>>`; none of them touches
//! the response body directly.

pub mod diagnostics;
pub mod greeting;
pub mod search;
pub mod session;
pub mod user;
