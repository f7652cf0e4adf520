use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::application::ports::{AnalysisClient, AnalysisClientError};
use crate::domain::{AnalysisReport, CoverLetter, PdfExportRequest, ResumeSubmission};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";
pub const GENERATE_ENDPOINT: &str = "/api/generate-cl";
pub const PDF_ENDPOINT: &str = "/api/pdf";

pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AnalysisClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response, AnalysisClientError> {
        let response = self
            .client
            .post(self.api_url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    #[tracing::instrument(skip(self, submission), fields(endpoint = ANALYZE_ENDPOINT))]
    async fn analyze(
        &self,
        submission: &ResumeSubmission,
    ) -> Result<AnalysisReport, AnalysisClientError> {
        self.post(ANALYZE_ENDPOINT, submission)
            .await?
            .json::<AnalysisReport>()
            .await
            .map_err(|e| AnalysisClientError::InvalidResponse(e.to_string()))
    }

    #[tracing::instrument(skip(self, submission), fields(endpoint = GENERATE_ENDPOINT))]
    async fn generate_cover_letter(
        &self,
        submission: &ResumeSubmission,
    ) -> Result<String, AnalysisClientError> {
        let letter = self
            .post(GENERATE_ENDPOINT, submission)
            .await?
            .json::<CoverLetter>()
            .await
            .map_err(|e| AnalysisClientError::InvalidResponse(e.to_string()))?;

        Ok(letter.into_text())
    }

    #[tracing::instrument(skip(self, request), fields(endpoint = PDF_ENDPOINT, title = %request.title))]
    async fn render_pdf(&self, request: &PdfExportRequest) -> Result<Bytes, AnalysisClientError> {
        self.post(PDF_ENDPOINT, request)
            .await?
            .bytes()
            .await
            .map_err(|e| AnalysisClientError::Transport(e.to_string()))
    }
}
