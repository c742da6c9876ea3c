use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::TransportError;

/// Query parameters, kept sorted by name.
pub type Options = BTreeMap<String, String>;

/// Fetches raw payloads from the provider.
///
/// Connection handling, TLS, redirects and deadlines are the transport's
/// business; the client only needs the body bytes.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, url: &str, query: &Options) -> Result<Vec<u8>, TransportError>;
}

/// The default transport, a plain GET through reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Uses a preconfigured client, e.g. one with a timeout.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, query: &Options) -> Result<Vec<u8>, TransportError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| TransportError::Request { url: url.to_owned(), source })?;

        // the provider explains failures in an XML body, so keep reading
        let status = res.status();
        if !status.is_success() {
            warn!(%status, url, "provider answered with non-success status");
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| TransportError::Body { url: url.to_owned(), source })?;

        debug!(url, bytes = body.len(), "received payload");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn options(pairs: &[(&str, &str)]) -> Options {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn sends_query_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/premium/v1/weather.ashx"))
            .and(query_param("key", "KEY"))
            .and(query_param("q", "London"))
            .and(query_param("format", "xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<data/>"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/premium/v1/weather.ashx", server.uri());
        let body = transport
            .fetch(&url, &options(&[("key", "KEY"), ("q", "London"), ("format", "xml")]))
            .await
            .expect("fetch should succeed");

        assert_eq!(body, b"<data/>");
    }

    #[tokio::test]
    async fn error_status_still_returns_body() {
        let server = MockServer::start().await;
        let xml = "<data><error><msg>API key is invalid</msg></error></data>";
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string(xml))
            .mount(&server)
            .await;

        let body = HttpTransport::new()
            .fetch(&format!("{}/premium/v1/tz.ashx", server.uri()), &Options::new())
            .await
            .expect("body should be returned for non-success status");

        assert_eq!(body, xml.as_bytes());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/premium/v1/weather.ashx", listener.local_addr().unwrap());
        drop(listener);

        let err = HttpTransport::new().fetch(&url, &Options::new()).await.unwrap_err();

        assert!(matches!(err, TransportError::Request { .. }));
    }
}
