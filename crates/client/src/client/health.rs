//! Health check operations.

use super::BookReviewClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub database: String,
    pub redis: String,
}

impl BookReviewClient {
    /// Report server, database and cache reachability.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }
}
