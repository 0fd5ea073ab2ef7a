//! Client for a running statistics service.

mod basic;
mod transport;

pub use basic::BasicClient;
pub use transport::HttpClient;

use anyhow::{Result, anyhow};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::stats::{BasicStats, StatsResult};

#[derive(Serialize)]
struct NumbersRequest<'a> {
    numbers: &'a [f64],
}

/// Talks to the `/stats` endpoints of a service rooted at `base_url`.
pub struct StatsClient<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> StatsClient<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full statistics for `numbers`.
    pub async fn stats(&self, numbers: &[f64]) -> Result<StatsResult> {
        self.post("/stats", numbers).await
    }

    /// Mean, max and min for `numbers`.
    pub async fn basic_stats(&self, numbers: &[f64]) -> Result<BasicStats> {
        self.post("/stats/basic", numbers).await
    }

    /// The service's `/health` document.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let req = reqwest::Request::new(Method::GET, self.url("/health").parse()?);
        self.send(req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[tracing::instrument(skip(self, numbers), fields(count = numbers.len()))]
    async fn post<T: DeserializeOwned>(&self, path: &str, numbers: &[f64]) -> Result<T> {
        let body = serde_json::to_vec(&NumbersRequest { numbers })?;

        let mut req = reqwest::Request::new(Method::POST, self.url(path).parse()?);
        req.headers_mut().insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        *req.body_mut() = Some(body.into());

        self.send(req).await
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::Request) -> Result<T> {
        let url = req.url().to_string();
        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| anyhow!("Failed to send request to {}: {}", url, e))?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "Response received");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Request to {} failed with status {}: {}", url, status, body));
        }

        resp.json()
            .await
            .map_err(|e| anyhow!("Failed to parse response from {}: {}", url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = StatsClient::new(BasicClient::new(), "http://localhost:8000/");
        assert_eq!(client.url("/stats"), "http://localhost:8000/stats");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&NumbersRequest {
            numbers: &[1.0, 2.5],
        })
        .unwrap();
        assert_eq!(body, r#"{"numbers":[1.0,2.5]}"#);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let client = StatsClient::new(BasicClient::new(), "http://127.0.0.1:9");
        assert!(client.stats(&[1.0]).await.is_err());
    }
}
