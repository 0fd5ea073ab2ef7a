use async_trait::async_trait;
use reqwest::{Request, Response};

/// Sends an already-built request. Lets tests or other transports stand in for reqwest.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
