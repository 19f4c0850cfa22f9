//! Executes core requests over HTTP with ureq.

use news_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        // Status interpretation belongs to NewsClient, so 4xx/5xx come back as data.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), url = %req.url, "sending request");
        let mut response = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.url);
                for (key, value) in &req.headers {
                    builder = builder.header(key, value);
                }
                builder.call()
            }
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
