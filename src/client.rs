//! Thin HTTP JSON client for the wallet agent API
//!
//! All control-plane operations go through the local wallet agent; the
//! agent holds the keys and performs signing. This client only moves
//! JSON back and forth.

use serde_json::Value;

/// HTTP client bound to one agent base URL
#[derive(Debug, Clone)]
pub struct AgentClient {
    base: String,
    http: reqwest::Client,
}

impl AgentClient {
    pub fn new(base: &str) -> Self {
        AgentClient {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// GET a path, returning the raw response body
    pub async fn get(&self, path: &str) -> Result<String, reqwest::Error> {
        self.http
            .get(format!("{}{}", self.base, path))
            .send()
            .await?
            .text()
            .await
    }

    /// POST a JSON body, returning the raw response body
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<String, reqwest::Error> {
        self.http
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await?
            .text()
            .await
    }

    /// Parse a response body as JSON
    pub fn parse_json(raw: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
