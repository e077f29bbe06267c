//! # Wikipedia Summary Client
//!
//! Fetch a page summary from the Wikipedia REST API over HTTPS.
//!
//! ## Design Principles
//!
//! 1. **Literal Subject Mapping**: Spaces become underscores and the result is
//!    appended to the base URL; nothing else is rewritten.
//! 2. **Status Before Body**: A non-success status fails the lookup without
//!    reading or parsing the body.
//! 3. **Transport Defaults**: No timeout override and the default redirect
//!    policy of the shared `reqwest::Client`.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::USER_AGENT;
use tracing::debug;

use teanet_common::{LookupError, LookupResult, Summary};

use crate::lookup::SummaryLookup;

/// Public REST summary endpoint; the subject path is appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";

/// Identifying `User-Agent` sent with every lookup.
pub const TEANET_USER_AGENT: &str = "TeanetBot/1.0 (sushiware@gmail.com)";

/// Converts a lookup subject into its URL path segment.
///
/// **Input**: `"New York"`.
/// **Output**: `"New_York"`.
pub fn subject_path(subject: &str) -> String {
    subject.replace(' ', "_")
}

/// `SummaryLookup` backed by the Wikipedia REST API.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base_url: String,
}

impl WikipediaClient {
    /// Creates a client for the public endpoint.
    pub fn new() -> LookupResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client that appends subjects to `base_url`.
    ///
    /// Fails only if the HTTP stack (TLS backend) cannot be initialised.
    pub fn with_base_url(base_url: impl Into<String>) -> LookupResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(LookupError::transport)?;

        Ok(WikipediaClient {
            http,
            base_url: base_url.into(),
        })
    }

    /// Returns the full request URL for `subject`.
    pub fn request_url(&self, subject: &str) -> String {
        format!("{}{}", self.base_url, subject_path(subject))
    }
}

#[async_trait]
impl SummaryLookup for WikipediaClient {
    async fn summary(&self, subject: &str) -> LookupResult<Summary> {
        let url = self.request_url(subject);
        debug!(%url, "requesting page summary");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, TEANET_USER_AGENT)
            .send()
            .await
            .map_err(LookupError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        let body: Bytes = response.bytes().await.map_err(LookupError::transport)?;
        Summary::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and returns the raw request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{addr}/page/summary/"), handle)
    }

    #[test]
    fn subject_spaces_become_underscores() {
        assert_eq!(subject_path("New York City"), "New_York_City");
        assert_eq!(subject_path(" Rust"), "_Rust");
        assert_eq!(subject_path("Tea"), "Tea");
    }

    #[test]
    fn request_url_appends_subject_path() {
        let client = WikipediaClient::with_base_url("http://example.test/summary/").unwrap();
        assert_eq!(client.request_url("Green tea"), "http://example.test/summary/Green_tea");
    }

    #[tokio::test]
    async fn success_decodes_summary_and_sends_user_agent() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"title":"Tea","description":"Drink","extract":"Tea is a drink.","content_urls":{"desktop":{"page":"https://en.wikipedia.org/wiki/Tea"}}}"#,
        )
        .await;
        let client = WikipediaClient::with_base_url(base).unwrap();

        let summary = client.summary("Green tea").await.unwrap();
        assert_eq!(
            summary.to_string(),
            "Tea - Drink\n\nTea is a drink.\n\nRead more: https://en.wikipedia.org/wiki/Tea"
        );

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /page/summary/Green_tea HTTP/1.1\r\n"), "{head}");
        assert!(
            head.to_ascii_lowercase()
                .contains("user-agent: teanetbot/1.0 (sushiware@gmail.com)"),
            "{head}"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let (base, server) = serve_once("404 Not Found", r#"{"title":"ignored"}"#).await;
        let client = WikipediaClient::with_base_url(base).unwrap();

        let err = client.summary("No such page").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Wikipedia returned status 404");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", "not json").await;
        let client = WikipediaClient::with_base_url(base).unwrap();

        let err = client.summary("Tea").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = WikipediaClient::with_base_url(format!("http://{addr}/")).unwrap();
        let err = client.summary("Tea").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
