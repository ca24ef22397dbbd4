//! Failure side of the wrapper contract.

/// Receives the error of a failed handler.
///
/// `forward` consumes the sink, so an error can be forwarded at most once
/// per invocation.
pub trait FailureSink<E> {
    fn forward(self, error: E);
}

impl<E, F> FailureSink<E> for F
where
    F: FnOnce(E),
{
    fn forward(self, error: E) {
        self(error)
    }
}
