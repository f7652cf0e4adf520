use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AnalysisClient, AnalysisClientError, TextExtractor};
use crate::domain::{
    AnalysisReport, ExtractionFailure, PdfExportRequest, ResumeSubmission, SourceFile,
};

/// Orchestrates one user action at a time: load a document, analyze, generate, export.
///
/// Failures are terminal for the action; nothing is retried.
pub struct ResumeService {
    extractor: Arc<dyn TextExtractor>,
    client: Arc<dyn AnalysisClient>,
}

impl ResumeService {
    pub fn new(extractor: Arc<dyn TextExtractor>, client: Arc<dyn AnalysisClient>) -> Self {
        Self { extractor, client }
    }

    pub async fn load_document(&self, file: &SourceFile) -> Result<String, ResumeServiceError> {
        let text = self.extractor.extract(file).await?;
        Ok(text)
    }

    #[tracing::instrument(skip_all, fields(resume_chars = resume.len(), job_chars = job_description.len()))]
    pub async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisReport, ResumeServiceError> {
        let submission = Self::submission(resume, job_description)?;

        let report = self
            .client
            .analyze(&submission)
            .await
            .map_err(ResumeServiceError::Analysis)?;

        tracing::info!(
            score = report.score,
            keywords = report.keywords.len(),
            enhancements = report.enhancements.len(),
            "Analysis complete"
        );
        Ok(report)
    }

    #[tracing::instrument(skip_all, fields(resume_chars = resume.len(), job_chars = job_description.len()))]
    pub async fn generate_cover_letter(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<String, ResumeServiceError> {
        let submission = Self::submission(resume, job_description)?;

        let letter = self
            .client
            .generate_cover_letter(&submission)
            .await
            .map_err(ResumeServiceError::Generation)?;

        tracing::info!(letter_chars = letter.len(), "Cover letter generated");
        Ok(letter)
    }

    /// Renders the letter through the remote export endpoint.
    pub async fn export_remote_pdf(
        &self,
        content: &str,
        title: &str,
    ) -> Result<Bytes, ResumeServiceError> {
        if content.is_empty() {
            return Err(ResumeServiceError::EmptyContent);
        }

        let request = PdfExportRequest {
            content: content.to_string(),
            title: title.to_string(),
        };

        self.client
            .render_pdf(&request)
            .await
            .map_err(ResumeServiceError::Export)
    }

    fn submission(
        resume: &str,
        job_description: &str,
    ) -> Result<ResumeSubmission, ResumeServiceError> {
        let submission = ResumeSubmission::new(resume, job_description);
        if !submission.is_complete() {
            return Err(ResumeServiceError::IncompleteSubmission);
        }
        Ok(submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error("Please provide both resume and job description")]
    IncompleteSubmission,
    #[error("There is no cover letter to export")]
    EmptyContent,
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),
    #[error("Analysis failed: {0}")]
    Analysis(AnalysisClientError),
    #[error("Generation failed: {0}")]
    Generation(AnalysisClientError),
    #[error("PDF generation failed: {0}")]
    Export(AnalysisClientError),
}
