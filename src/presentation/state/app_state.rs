use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{AnalysisClient, TextExtractor};
use crate::application::services::ResumeService;
use crate::infrastructure::export::CoverLetterRenderer;
use crate::infrastructure::http::HttpAnalysisClient;
use crate::infrastructure::text_processing::ExtractorFactory;
use crate::presentation::config::Settings;

/// Everything a command handler needs, wired once from `Settings`.
pub struct AppState {
    pub resume_service: Arc<ResumeService>,
    pub renderer: Arc<CoverLetterRenderer>,
    pub export_title: String,
    pub extraction_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        client: Arc<dyn AnalysisClient>,
        settings: &Settings,
    ) -> Self {
        Self {
            resume_service: Arc::new(ResumeService::new(extractor, client)),
            renderer: Arc::new(CoverLetterRenderer::new(settings.page_layout())),
            export_title: settings.export.title.clone(),
            extraction_timeout: settings.extraction_timeout(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let extractor = ExtractorFactory::create(&settings.extraction)?;
        let client: Arc<dyn AnalysisClient> = Arc::new(HttpAnalysisClient::new(
            &settings.api.base_url,
            settings.request_timeout(),
        )?);

        tracing::info!(api = %settings.api.base_url, "Application state initialized");
        Ok(Self::new(extractor, client, settings))
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            resume_service: Arc::clone(&self.resume_service),
            renderer: Arc::clone(&self.renderer),
            export_title: self.export_title.clone(),
            extraction_timeout: self.extraction_timeout,
        }
    }
}
