//! Response side of the wrapper contract.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use serde::Serialize;

/// The response operations the wrapper needs from a framework.
///
/// Implemented by the framework binding. Serialization of the body belongs
/// to the writer.
pub trait ResponseWriter {
    fn set_status(&mut self, status: StatusCode);

    /// Append headers staged by the handler.
    fn set_headers(&mut self, headers: HeaderMap);

    fn write_json<T: Serialize + ?Sized>(&mut self, body: &T);
}

/// Handle passed to wrapped handlers alongside the request.
///
/// Headers staged here are applied to the response only when the handler
/// succeeds; on failure they are discarded with the rest of the response.
/// Clones share the same staging area.
#[derive(Debug, Clone, Default)]
pub struct ResponseHandle {
    headers: Arc<Mutex<HeaderMap>>,
}

impl ResponseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any value staged under the same name.
    pub fn insert_header(&self, name: HeaderName, value: HeaderValue) {
        self.lock().insert(name, value);
    }

    /// Add a header value without replacing existing ones.
    pub fn append_header(&self, name: HeaderName, value: HeaderValue) {
        self.lock().append(name, value);
    }

    /// Take every staged header, leaving the handle empty.
    pub(crate) fn take_headers(&self) -> HeaderMap {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, HeaderMap> {
        // A poisoned map is still a valid map.
        self.headers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
