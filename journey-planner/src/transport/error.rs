//! Transport error types.

/// Errors from executing a query against the GraphQL endpoint.
///
/// These are passed through to callers unchanged; the client never
/// reinterprets a transport failure as a missing entity.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Endpoint returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the endpoint
    #[error("rate limited by JourneyPlanner API")]
    RateLimited,

    /// Client name or credentials rejected
    #[error("unauthorized (check the client name header)")]
    Unauthorized,

    /// Client configuration could not be turned into a request
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = TransportError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = TransportError::Json {
            message: "EOF".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: EOF");

        let err = TransportError::InvalidConfig("bad header".into());
        assert_eq!(err.to_string(), "invalid configuration: bad header");
    }
}
