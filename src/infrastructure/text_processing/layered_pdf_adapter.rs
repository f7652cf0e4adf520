use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{PdfEngine, PdfEngineError, TextExtractor};
use crate::domain::{
    ContentType, ExtractionFailure, ExtractionOutcome, SourceFile, WorkerConfig, WorkerSource,
};

use super::failure_classifier::classify_engine_error;
use super::source_reader::read_source;

/// One open → iterate pages → concatenate run under a single worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionAttempt {
    /// First resolvable worker from the preference list.
    Primary(Vec<WorkerSource>),
    /// Exactly this worker, no resolution.
    Forced(WorkerSource),
}

/// PDF strategy with a primary attempt and a local-only fallback.
///
/// Attempts run strictly in sequence. The first success wins; when every
/// attempt fails, only the last error is classified.
pub struct LayeredPdfAdapter {
    engine: Arc<dyn PdfEngine>,
    worker_config: WorkerConfig,
}

impl LayeredPdfAdapter {
    pub fn new(engine: Arc<dyn PdfEngine>, worker_config: WorkerConfig) -> Self {
        Self {
            engine,
            worker_config,
        }
    }

    pub fn attempts(&self) -> Vec<ExtractionAttempt> {
        vec![
            ExtractionAttempt::Primary(self.worker_config.preference().to_vec()),
            ExtractionAttempt::Forced(self.worker_config.local_only()),
        ]
    }

    async fn resolve(&self, attempt: &ExtractionAttempt) -> WorkerSource {
        match attempt {
            ExtractionAttempt::Forced(source) => source.clone(),
            ExtractionAttempt::Primary(preference) => {
                for source in preference {
                    if self.engine.is_resolvable(source).await {
                        return source.clone();
                    }
                }
                self.worker_config.local_only()
            }
        }
    }

    async fn run_attempt(
        &self,
        data: &[u8],
        worker: &WorkerSource,
    ) -> Result<String, PdfEngineError> {
        let mut document = self.engine.open(data, worker).await?;
        let mut full_text = String::new();

        for page_number in 1..=document.page_count() {
            let items = document.text_items(page_number).await?;
            full_text.push_str(&items.join(" "));
            full_text.push('\n');
        }

        Ok(full_text.trim().to_string())
    }
}

#[async_trait]
impl TextExtractor for LayeredPdfAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract(&self, file: &SourceFile) -> ExtractionOutcome {
        if file.content_type() != Some(ContentType::Pdf) {
            return Err(ExtractionFailure::unsupported(&file.filename, &file.media_type));
        }

        let data = read_source(file).await?;
        let mut last_error = None;

        for (index, attempt) in self.attempts().iter().enumerate() {
            let worker = self.resolve(attempt).await;

            match self.run_attempt(&data, &worker).await {
                Ok(text) => {
                    tracing::info!(
                        attempt = index + 1,
                        worker_kind = worker.kind(),
                        worker = %worker,
                        "PDF text extraction complete"
                    );
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt = index + 1,
                        worker_kind = worker.kind(),
                        worker = %worker,
                        error = %e,
                        "PDF extraction attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        let error = last_error.unwrap_or_else(|| {
            PdfEngineError::Other("no extraction attempt configured".to_string())
        });
        Err(classify_engine_error(&error))
    }
}
