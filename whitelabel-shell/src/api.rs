//! Thin client for the chat backend.
//!
//! Chat delivery, document listing/processing, and logo bytes all come
//! from the separate backend service. Failures are returned to the pages,
//! which fold them into placeholder UI instead of crashing the shell.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use whitelabel_model::{ApiResponse, DocumentProcessingResult, DocumentSummary};

/// HTTP client for the chat backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] base URL: {base_url}");

        Self { client, base_url }
    }

    /// Build a backend API URL.
    pub fn build_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Hand one chat message to the backend for delivery.
    pub async fn send_chat_message(&self, content: String) -> Result<()> {
        let response = self
            .client
            .post(self.build_url("chat/messages"))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            anyhow::bail!("message rejected by backend: {}", response.status())
        }
    }

    /// Fetch the processed-document listing.
    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        let response = self.client.get(self.build_url("documents")).send().await?;

        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<Vec<DocumentSummary>> = response.json().await?;
                match envelope.data {
                    Some(documents) => Ok(documents),
                    None => Err(anyhow::anyhow!(envelope
                        .error
                        .unwrap_or_else(|| "empty response from server".to_string()))),
                }
            }
            status => anyhow::bail!("document listing failed: {status}"),
        }
    }

    /// Upload a local file for text extraction.
    pub async fn upload_document(&self, path: PathBuf) -> Result<DocumentProcessingResult> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();
        let bytes = tokio::fs::read(&path).await?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.build_url("documents/upload"))
            .multipart(form)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<DocumentProcessingResult> = response.json().await?;
                match envelope.data {
                    Some(result) => Ok(result),
                    None => Err(anyhow::anyhow!(envelope
                        .error
                        .unwrap_or_else(|| "empty response from server".to_string()))),
                }
            }
            status => anyhow::bail!("document upload failed: {status}"),
        }
    }

    /// Fetch the tenant logo into an image handle.
    ///
    /// The URL is absolute (it comes from the branding configuration, not
    /// the backend base URL).
    pub async fn fetch_logo(&self, url: String) -> Result<iced::widget::image::Handle> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("logo fetch failed: {status}");
        }

        let bytes = response.bytes().await?;
        Ok(iced::widget::image::Handle::from_bytes(bytes.to_vec()))
    }
}
