use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{AnalysisReport, PdfExportRequest, ResumeSubmission};

#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(
        &self,
        submission: &ResumeSubmission,
    ) -> Result<AnalysisReport, AnalysisClientError>;

    async fn generate_cover_letter(
        &self,
        submission: &ResumeSubmission,
    ) -> Result<String, AnalysisClientError>;

    async fn render_pdf(&self, request: &PdfExportRequest) -> Result<Bytes, AnalysisClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisClientError {
    #[error("API call failed: {status} {reason} - {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
