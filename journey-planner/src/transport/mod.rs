//! Query execution against the GraphQL endpoint.
//!
//! The client only needs one thing from a transport: send a document plus
//! variables, get back decoded JSON. [`HttpTransport`] does that over
//! HTTPS with reqwest; tests substitute an in-memory implementation.

mod error;
mod http;

use std::future::Future;

use serde_json::Value;

pub use error::TransportError;
pub use http::HttpTransport;

/// GraphQL variables: argument name to JSON value.
pub type Variables = serde_json::Map<String, Value>;

/// Executes GraphQL documents.
///
/// Implementations make a single attempt per call. Any failure to obtain a
/// JSON response is a [`TransportError`]; a JSON response that carries
/// GraphQL `errors` is still a successful execution.
pub trait Transport {
    fn execute(
        &self,
        document: &str,
        variables: &Variables,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}
