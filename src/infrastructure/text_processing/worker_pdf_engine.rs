use async_trait::async_trait;

use crate::application::ports::{PdfDocumentHandle, PdfEngine, PdfEngineError};
use crate::domain::WorkerSource;

use super::bundled_pdf_worker::BundledPdfWorker;
use super::process_pdf_worker::ProcessPdfWorker;
use super::remote_worker_fetcher::RemoteWorkerFetcher;

/// Production [`PdfEngine`]: opens documents with whichever worker an attempt picked.
pub struct WorkerPdfEngine {
    bundled: Option<BundledPdfWorker>,
    fetcher: RemoteWorkerFetcher,
}

impl WorkerPdfEngine {
    pub fn new(bundled_enabled: bool, fetcher: RemoteWorkerFetcher) -> Self {
        Self {
            bundled: bundled_enabled.then(BundledPdfWorker::new),
            fetcher,
        }
    }
}

#[async_trait]
impl PdfEngine for WorkerPdfEngine {
    async fn is_resolvable(&self, source: &WorkerSource) -> bool {
        match source {
            WorkerSource::Bundled => self.bundled.is_some(),
            WorkerSource::LocalFile(path) => tokio::fs::metadata(path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false),
            WorkerSource::Remote(_) => true,
        }
    }

    async fn open(
        &self,
        data: &[u8],
        worker: &WorkerSource,
    ) -> Result<Box<dyn PdfDocumentHandle>, PdfEngineError> {
        let pages = match worker {
            WorkerSource::Bundled => {
                let bundled = self.bundled.as_ref().ok_or_else(|| {
                    PdfEngineError::WorkerSetup("bundled worker is disabled".to_string())
                })?;
                bundled.open(data).await?
            }
            WorkerSource::LocalFile(path) => ProcessPdfWorker::run(path, data).await?,
            WorkerSource::Remote(url) => {
                let path = self.fetcher.fetch(url).await?;
                ProcessPdfWorker::run(&path, data).await?
            }
        };

        Ok(Box::new(pages))
    }
}
