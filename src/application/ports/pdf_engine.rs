use async_trait::async_trait;

use crate::domain::WorkerSource;

/// PDF parsing backend driven by a worker chosen per attempt.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Whether `source` can be used right now. Resolution never fails;
    /// an unusable source reports `false`.
    async fn is_resolvable(&self, source: &WorkerSource) -> bool;

    async fn open(
        &self,
        data: &[u8],
        worker: &WorkerSource,
    ) -> Result<Box<dyn PdfDocumentHandle>, PdfEngineError>;
}

/// An opened document. Dropping it releases everything the worker acquired.
#[async_trait]
pub trait PdfDocumentHandle: Send {
    fn page_count(&self) -> usize;

    /// Text items of the 1-based `page_number`, in the order the worker yields them.
    async fn text_items(&mut self, page_number: usize) -> Result<Vec<String>, PdfEngineError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdfEngineError {
    #[error("setting up worker failed: {0}")]
    WorkerSetup(String),
    #[error("worker error: {0}")]
    WorkerRuntime(String),
    #[error("failed to load parsing module: {0}")]
    ModuleLoad(String),
    #[error("invalid PDF structure: {0}")]
    InvalidDocument(String),
    /// Untagged failure, classified by its message.
    #[error("{0}")]
    Other(String),
}
