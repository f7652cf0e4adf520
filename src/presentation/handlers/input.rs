use std::path::Path;

use anyhow::{Context, bail};
use tokio::io::AsyncReadExt;

use crate::application::services::ResumeServiceError;
use crate::domain::{ContentType, ErrorCategory, ExtractionFailure, SourceFile, SourcePayload};
use crate::infrastructure::observability::text_preview;
use crate::presentation::state::AppState;

pub const STDIN_ARG: &str = "-";
pub const UPLOAD_HINT: &str = "Please upload a .txt or .pdf file";

const STDIN_FILENAME: &str = "stdin";

/// Builds a [`SourceFile`] from a CLI argument. `-` reads stdin, which is
/// treated as plain text unless a media type is given.
pub async fn source_from_arg(path: &Path, media_type: Option<&str>) -> anyhow::Result<SourceFile> {
    let file = if path.as_os_str() == STDIN_ARG {
        let mut data = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut data)
            .await
            .context("failed to read stdin")?;
        let media_type = media_type.unwrap_or(ContentType::Text.as_mime());
        SourceFile::from_bytes(STDIN_FILENAME, media_type, data)
    } else {
        SourceFile::from_path(path, media_type.unwrap_or_default())
    };

    if file.content_type().is_none() {
        bail!(UPLOAD_HINT);
    }
    Ok(file)
}

pub async fn source_size(file: &SourceFile) -> Option<u64> {
    match &file.payload {
        SourcePayload::Memory(data) => Some(data.len() as u64),
        SourcePayload::Path(path) => tokio::fs::metadata(path).await.ok().map(|m| m.len()),
    }
}

/// Extracts text, bounded by the configured extraction deadline.
pub async fn load_text(state: &AppState, file: &SourceFile) -> Result<String, ResumeServiceError> {
    let text = match state.extraction_timeout {
        Some(limit) => tokio::time::timeout(limit, state.resume_service.load_document(file))
            .await
            .map_err(|_| {
                ExtractionFailure::new(
                    ErrorCategory::UnknownExtractionFailure,
                    format!("extraction timed out after {}s", limit.as_secs()),
                )
            })??,
        None => state.resume_service.load_document(file).await?,
    };

    tracing::debug!(
        filename = %file.filename,
        preview = %text_preview(&text),
        "Document loaded"
    );
    Ok(text)
}
