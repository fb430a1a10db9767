//! HTTP revalidation client
//!
//! POSTs invalidated paths to the rendering layer's revalidation
//! endpoint, authenticated by a shared secret header.

use serde_json::json;

use crate::{RevalidateError, Revalidator};

/// Real HTTP revalidator for the production view cache.
pub struct HttpRevalidator {
    http: reqwest::Client,
    endpoint: String,
    secret: Option<String>,
}

impl HttpRevalidator {
    pub fn new(endpoint: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            secret,
        }
    }
}

#[async_trait::async_trait]
impl Revalidator for HttpRevalidator {
    async fn revalidate(&self, path: &str) -> Result<(), RevalidateError> {
        let mut request = self.http.post(&self.endpoint).json(&json!({ "path": path }));

        if let Some(secret) = &self.secret {
            request = request.header("x-revalidate-secret", secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RevalidateError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(RevalidateError::Response(format!(
                "Revalidation endpoint returned {}: {}",
                status, body
            )));
        }

        tracing::debug!(path, "View path revalidated");
        Ok(())
    }
}
