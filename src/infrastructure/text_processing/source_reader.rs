use bytes::Bytes;

use crate::domain::{ErrorCategory, ExtractionFailure, SourceFile, SourcePayload};

pub async fn read_source(file: &SourceFile) -> Result<Bytes, ExtractionFailure> {
    match &file.payload {
        SourcePayload::Memory(bytes) => Ok(bytes.clone()),
        SourcePayload::Path(path) => tokio::fs::read(path).await.map(Bytes::from).map_err(|e| {
            ExtractionFailure::new(
                ErrorCategory::ReadFailure,
                format!("failed to read {}: {e}", path.display()),
            )
        }),
    }
}
