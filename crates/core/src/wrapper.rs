//! The adapter itself.

use std::future::Future;
use std::marker::PhantomData;

use serde::Serialize;

use crate::envelope::Envelope;
use crate::outcome::Outcome;
use crate::request::{PathParams, QueryParams, WrapperRequest};
use crate::response::{ResponseHandle, ResponseWriter};
use crate::sink::FailureSink;

/// A wrapped handler, produced by [`async_wrapper`].
///
/// Each [`call`](AsyncWrapper::call) runs the inner handler once and then
/// does exactly one of:
///
/// - on `Ok(outcome)`: set the status, apply staged headers, and write the
///   [`Envelope`];
/// - on `Err(error)`: pass `error` unchanged to the failure sink, leaving the
///   response untouched.
pub struct AsyncWrapper<F, P = PathParams, B = serde_json::Value, Q = QueryParams> {
    handler: F,
    _shape: PhantomData<fn() -> (P, B, Q)>,
}

/// Wrap an async handler returning `Result<Outcome<T>, E>`.
///
/// ```
/// use http::StatusCode;
/// use typed_wrapper_core::{async_wrapper, Outcome, ResponseHandle, WrapperRequest};
///
/// let ping = async_wrapper(|_req: WrapperRequest, _res: ResponseHandle| async {
///     Ok::<_, std::io::Error>(Outcome::empty(StatusCode::NO_CONTENT))
/// });
/// # let _ = ping;
/// ```
pub fn async_wrapper<F, Fut, P, B, Q, T, E>(handler: F) -> AsyncWrapper<F, P, B, Q>
where
    F: Fn(WrapperRequest<P, B, Q>, ResponseHandle) -> Fut,
    Fut: Future<Output = Result<Outcome<T>, E>>,
{
    AsyncWrapper {
        handler,
        _shape: PhantomData,
    }
}

impl<F, P, B, Q> AsyncWrapper<F, P, B, Q> {
    /// Run the handler for one request.
    ///
    /// Never fails: errors leave through `next`.
    pub async fn call<Fut, T, E, R, S>(
        &self,
        request: WrapperRequest<P, B, Q>,
        response: &mut R,
        next: S,
    ) where
        F: Fn(WrapperRequest<P, B, Q>, ResponseHandle) -> Fut,
        Fut: Future<Output = Result<Outcome<T>, E>>,
        T: Serialize,
        R: ResponseWriter,
        S: FailureSink<E>,
    {
        let handle = ResponseHandle::new();

        match (self.handler)(request, handle.clone()).await {
            Ok(outcome) => {
                tracing::debug!(
                    status = outcome.status_code().as_u16(),
                    has_data = outcome.has_data(),
                    "Handler succeeded, writing envelope"
                );

                response.set_status(outcome.status_code());

                let headers = handle.take_headers();
                if !headers.is_empty() {
                    response.set_headers(headers);
                }

                response.write_json(&Envelope::from_outcome(&outcome));
            }
            Err(error) => {
                tracing::debug!("Handler failed, forwarding error");
                next.forward(error);
            }
        }
    }
}

impl<F: Clone, P, B, Q> Clone for AsyncWrapper<F, P, B, Q> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            _shape: PhantomData,
        }
    }
}
