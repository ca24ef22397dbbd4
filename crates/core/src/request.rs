//! Typed request view handed to wrapped handlers.
//!
//! The three payload shapes (route params, body, query) are independent
//! generic parameters with permissive defaults. Nothing here validates the
//! shapes at runtime: whoever builds the view (normally the framework
//! binding) is responsible for deserializing into the declared types.

use std::collections::HashMap;
use std::marker::PhantomData;

use http::{HeaderMap, Method, Uri};

/// Default route parameter shape: every captured segment by name.
pub type PathParams = HashMap<String, String>;

/// Default query shape: flat `key=value` pairs.
pub type QueryParams = HashMap<String, String>;

/// Request view with typed `params`, `body` and `query`.
///
/// ```
/// use serde::Deserialize;
/// use typed_wrapper_core::WrapperRequest;
///
/// #[derive(Deserialize)]
/// struct UserParams {
///     id: String,
/// }
///
/// // Only the params shape is overridden; body and query keep their defaults.
/// type UserRequest = WrapperRequest<UserParams>;
/// ```
#[derive(Debug, Clone)]
pub struct WrapperRequest<P = PathParams, B = serde_json::Value, Q = QueryParams> {
    /// Route parameters captured from the matched path.
    pub params: P,
    /// Parsed request body.
    pub body: B,
    /// Parsed query string.
    pub query: Q,
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

impl<P, B, Q> WrapperRequest<P, B, Q> {
    /// Build a view with the given payloads and an empty `GET /` context.
    pub fn new(params: P, body: B, query: Q) -> Self {
        Self {
            params,
            body,
            query,
            method: Method::GET,
            uri: Uri::from_static("/"),
            headers: HeaderMap::new(),
        }
    }

    /// Replace the method, URI and headers.
    pub fn with_context(mut self, method: Method, uri: Uri, headers: HeaderMap) -> Self {
        self.method = method;
        self.uri = uri;
        self.headers = headers;
        self
    }
}

impl<P: Default, B: Default, Q: Default> Default for WrapperRequest<P, B, Q> {
    fn default() -> Self {
        Self::new(P::default(), B::default(), Q::default())
    }
}

/// A named request shape, for reusing one `(params, body, query)` triple
/// across several handlers.
pub trait RequestShape {
    type Params;
    type Body;
    type Query;
}

/// Marker implementing [`RequestShape`] from explicit type parameters.
///
/// ```
/// use typed_wrapper_core::{QueryParams, Shape, ShapedRequest};
///
/// struct Login {
///     email: String,
///     password: String,
/// }
///
/// type LoginShape = Shape<QueryParams, Login>;
/// type LoginRequest = ShapedRequest<LoginShape>;
/// ```
pub struct Shape<P = PathParams, B = serde_json::Value, Q = QueryParams>(
    PhantomData<fn() -> (P, B, Q)>,
);

impl<P, B, Q> RequestShape for Shape<P, B, Q> {
    type Params = P;
    type Body = B;
    type Query = Q;
}

/// The request view for a named shape.
pub type ShapedRequest<S> = WrapperRequest<
    <S as RequestShape>::Params,
    <S as RequestShape>::Body,
    <S as RequestShape>::Query,
>;
