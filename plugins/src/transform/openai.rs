use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use greybeard_core::api::{
    build_request, interpret_response, Credential, OpenAiConfig, TransformError, TransformPlugin,
};

/// One chat-completion round trip per call. No retries.
pub struct OpenAiTransformPlugin {
    client: reqwest::Client,
    cfg: OpenAiConfig,
    credential: Credential,
}

impl OpenAiTransformPlugin {
    pub fn new(cfg: OpenAiConfig, credential: Credential) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            cfg,
            credential,
        })
    }

    fn classify(&self, e: reqwest::Error) -> TransformError {
        if e.is_timeout() {
            TransformError::Timeout {
                timeout_ms: self.cfg.timeout_ms,
            }
        } else if e.is_builder() {
            TransformError::Build(e.to_string())
        } else {
            TransformError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl TransformPlugin for OpenAiTransformPlugin {
    fn name(&self) -> &str {
        "openai"
    }

    async fn transform(&self, captured: &str) -> Result<String, TransformError> {
        let request = build_request(&self.cfg.model, self.cfg.temperature, captured);
        let body = serde_json::to_vec(&request).map_err(|e| TransformError::Build(e.to_string()))?;

        tracing::debug!(
            target: "greybeard.transform",
            url = %self.cfg.base_url,
            model = %self.cfg.model,
            body_bytes = body.len(),
            "sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.cfg.base_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.credential.expose()))
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        // `text` consumes the response, releasing the connection on every path.
        let text = resp.text().await.map_err(|e| match self.classify(e) {
            TransformError::Transport(msg) => TransformError::ReadBody(msg),
            other => other,
        })?;

        tracing::debug!(
            target: "greybeard.transform",
            status = status.as_u16(),
            body_bytes = text.len(),
            "chat completion response received"
        );

        interpret_response(&text)
    }
}
