//! # Generate Client
//!
//! A small client for Ollama-style `POST /api/generate` endpoints.
//!
//! One call sends one prompt with streaming disabled, parses the JSON body
//! and hands the `response` field to a [`GenerateEventHandler`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use client::{Client, config::ClientConfig, handler::DefaultGenerateEventHandler};
//! use std::sync::Arc;
//!
//! async fn ask() -> anyhow::Result<()> {
//!     let client = Client::new(
//!         ClientConfig {
//!             base_url: "http://localhost:11434".to_string(),
//!             ..ClientConfig::default()
//!         },
//!         Arc::new(DefaultGenerateEventHandler),
//!     );
//!
//!     // Prints the generated text, or `None` when the server sent none
//!     client.send("What is your purpose").await?;
//!
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result, bail};
use request::GenerateRequest;
use response::GenerateResponse;
use std::sync::Arc;
use tracing::{debug, info, warn};

use config::ClientConfig;
use handler::GenerateEventHandler;

pub mod config;
pub mod handler;

pub struct Client {
    config: ClientConfig,
    handler: Arc<dyn GenerateEventHandler>,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig, handler: Arc<dyn GenerateEventHandler>) -> Self {
        Self {
            config,
            handler,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request body that `generate` sends for `prompt`
    pub fn request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest::builder()
            .model(self.config.model_id.as_str())
            .prompt(prompt)
            .system(self.config.system.clone())
            .build()
    }

    /// Send one generate request and parse the JSON body
    pub async fn generate(&self, prompt: &str) -> Result<GenerateResponse> {
        let url = self.config.generate_url();
        let request = self.request(prompt);

        let response = self.send_http_request(&url, &request).await?;
        let body = response
            .bytes()
            .await
            .context("Failed to read generate response body")?;

        let generate_response: GenerateResponse =
            serde_json::from_slice(&body).context("Failed to parse generate response as JSON")?;

        debug!(
            "Parsed generate response - model: {:?}, done: {:?}, done_reason: {:?}, \
             eval_count: {:?}, total_duration: {:?}",
            generate_response.model,
            generate_response.done,
            generate_response.done_reason,
            generate_response.eval_count,
            generate_response.total_duration
        );

        Ok(generate_response)
    }

    /// Generate, pass the extracted text to the handler and return it
    pub async fn send(&self, prompt: &str) -> Result<Option<String>> {
        let response = self.generate(prompt).await?;

        if response.text().is_none() {
            warn!("Generate response has no `response` field");
        }

        self.handler.on_response(response.text())?;
        Ok(response.into_text())
    }

    async fn send_http_request(
        &self,
        url: &str,
        request: &GenerateRequest,
    ) -> Result<reqwest::Response> {
        info!("Sending prompt to model {} at {}", request.model, url);
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to send generate request to {url}"))?;

        let status = response.status();
        info!("Got response with status {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = serde_json::from_str::<GenerateResponse>(&body)
                .ok()
                .and_then(|r| r.error);

            match error {
                Some(error) => bail!("Request failed with status: {status}: {error}"),
                None => bail!("Request failed with status: {status}"),
            }
        }

        Ok(response)
    }
}
