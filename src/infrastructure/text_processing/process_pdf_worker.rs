use std::io::{ErrorKind, Write};
use std::path::Path;

use tokio::process::Command;

use crate::application::ports::PdfEngineError;

use super::parsed_pages::ParsedPages;

/// Runs a pdftotext-compatible executable: `<worker> <input.pdf> -`.
///
/// Exit codes follow poppler: 1 cannot open the document, 3 permission
/// (encryption) error, anything else is a worker failure.
pub struct ProcessPdfWorker;

impl ProcessPdfWorker {
    #[tracing::instrument(skip(data), fields(worker = %executable.display(), bytes = data.len()))]
    pub async fn run(executable: &Path, data: &[u8]) -> Result<ParsedPages, PdfEngineError> {
        let mut input = tempfile::NamedTempFile::new().map_err(|e| {
            PdfEngineError::WorkerSetup(format!("failed to create temp file: {e}"))
        })?;

        input.write_all(data).map_err(|e| {
            PdfEngineError::WorkerSetup(format!("failed to write temp file: {e}"))
        })?;

        let output = Command::new(executable)
            .arg(input.path())
            .arg("-")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => PdfEngineError::WorkerSetup(
                    format!("cannot start {}: {e}", executable.display()),
                ),
                _ => PdfEngineError::WorkerRuntime(format!(
                    "failed to run {}: {e}",
                    executable.display()
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(match output.status.code() {
                Some(1) | Some(3) => PdfEngineError::InvalidDocument(stderr),
                _ => PdfEngineError::WorkerRuntime(format!(
                    "worker exited with {}: {stderr}",
                    output.status
                )),
            });
        }

        let pages = ParsedPages::from_form_feed_output(&String::from_utf8_lossy(&output.stdout));
        Ok(pages)
    }
}
