//! reqwest-backed transport.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::error::TransportError;
use super::{Transport, Variables};
use crate::client::ClientConfig;

/// Header the JourneyPlanner API uses to identify the calling application.
const CLIENT_NAME_HEADER: &str = "et-client-name";

/// How much of an undecodable body to keep in the error.
const BODY_EXCERPT_CHARS: usize = 500;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Variables,
}

/// Transport that POSTs GraphQL-over-JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        let client_name = HeaderValue::from_str(&config.client_name).map_err(|_| {
            TransportError::InvalidConfig(format!("invalid client name {:?}", config.client_name))
        })?;
        headers.insert(HeaderName::from_static(CLIENT_NAME_HEADER), client_name);

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                TransportError::InvalidConfig(format!("invalid header name {name:?}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                TransportError::InvalidConfig(format!("invalid value for header {name}"))
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The URL queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        document: &str,
        variables: &Variables,
    ) -> Result<Value, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query: document,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        trace!(status = status.as_u16(), endpoint = %self.endpoint, "GraphQL response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TransportError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_creation() {
        let config = ClientConfig::new("acme-departure-board");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), config.endpoint);
    }

    #[test]
    fn invalid_client_name_rejected() {
        let config = ClientConfig::new("bad\nname");
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, TransportError::InvalidConfig(_)));
    }

    #[test]
    fn invalid_header_name_rejected() {
        let config = ClientConfig::new("acme").with_header("not a header", "x");
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, TransportError::InvalidConfig(_)));
    }

    #[test]
    fn request_body_shape() {
        let mut variables = Variables::new();
        variables.insert("id".into(), Value::from("NSR:StopPlace:1"));

        let body = serde_json::to_value(GraphQlRequest {
            query: "query { x }",
            variables: &variables,
        })
        .unwrap();

        assert_eq!(body["query"], "query { x }");
        assert_eq!(body["variables"]["id"], "NSR:StopPlace:1");
    }
}
