use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{PdfEngine, TextExtractor};
use crate::domain::{ContentType, WorkerConfig};
use crate::presentation::config::ExtractionSettings;

use super::composite_text_extractor::CompositeTextExtractor;
use super::layered_pdf_adapter::LayeredPdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::remote_worker_fetcher::RemoteWorkerFetcher;
use super::worker_pdf_engine::WorkerPdfEngine;

const WORKER_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("local_worker_path must not be empty")]
    MissingLocalWorker,
    #[error("extractor initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn worker_config(settings: &ExtractionSettings) -> WorkerConfig {
        WorkerConfig::with_defaults(
            settings.bundled_worker,
            settings.local_worker_path.clone(),
            settings.remote_worker_base_url.as_deref(),
        )
    }

    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        if settings.local_worker_path.as_os_str().is_empty() {
            return Err(ExtractorFactoryError::MissingLocalWorker);
        }

        let client = Client::builder()
            .connect_timeout(WORKER_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ExtractorFactoryError::InitializationFailed(e.to_string()))?;

        let cache_dir = settings
            .worker_cache_dir
            .clone()
            .unwrap_or_else(RemoteWorkerFetcher::default_cache_dir);

        let engine: Arc<dyn PdfEngine> = Arc::new(WorkerPdfEngine::new(
            settings.bundled_worker,
            RemoteWorkerFetcher::new(client, cache_dir),
        ));
        let worker_config = Self::worker_config(settings);

        tracing::info!(
            preference = ?worker_config.preference(),
            local_worker = %worker_config.local_worker().display(),
            "PDF worker configuration loaded"
        );

        Ok(Self::with_engine(engine, worker_config))
    }

    /// Wires the plain-text and layered PDF strategies around `engine`.
    pub fn with_engine(
        engine: Arc<dyn PdfEngine>,
        worker_config: WorkerConfig,
    ) -> Arc<dyn TextExtractor> {
        let text_adapter: Arc<dyn TextExtractor> = Arc::new(PlainTextAdapter);
        let pdf_adapter: Arc<dyn TextExtractor> =
            Arc::new(LayeredPdfAdapter::new(engine, worker_config));

        Arc::new(CompositeTextExtractor::new(vec![
            (ContentType::Text, text_adapter),
            (ContentType::Pdf, pdf_adapter),
        ]))
    }
}
