use std::io::Write;
use std::path::Path;

use pdf_oxide::PdfDocument;

use crate::application::ports::PdfEngineError;

use super::parsed_pages::ParsedPages;

/// In-process PDF parser run on the blocking thread pool.
#[derive(Default)]
pub struct BundledPdfWorker;

impl BundledPdfWorker {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<Vec<String>>, PdfEngineError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| PdfEngineError::InvalidDocument(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            PdfEngineError::InvalidDocument(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                PdfEngineError::InvalidDocument(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;

            pages.push(text.lines().map(str::to_string).collect());
        }

        Ok(pages)
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn open(&self, data: &[u8]) -> Result<ParsedPages, PdfEngineError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            PdfEngineError::WorkerSetup(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            PdfEngineError::WorkerSetup(format!("failed to write temp file: {e}"))
        })?;

        let pages = tokio::task::spawn_blocking(move || {
            let pages = Self::extract_pages(temp_file.path());
            drop(temp_file);
            pages
        })
        .await
        .map_err(|e| PdfEngineError::WorkerRuntime(format!("worker task failed: {e}")))??;

        tracing::debug!(page_count = pages.len(), "Bundled worker parsed document");
        Ok(ParsedPages::new(pages))
    }
}
