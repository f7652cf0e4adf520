use async_trait::async_trait;

use crate::domain::{ExtractionOutcome, SourceFile};

/// Turns one user-supplied file into text or a classified failure.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &SourceFile) -> ExtractionOutcome;
}
