use crate::application::ports::PdfEngineError;
use crate::domain::{ErrorCategory, ExtractionFailure};

/// Maps a tagged engine error straight to its category; untagged errors
/// fall back to [`classify_message`].
pub fn classify_engine_error(error: &PdfEngineError) -> ExtractionFailure {
    let category = match error {
        PdfEngineError::WorkerSetup(_) => ErrorCategory::WorkerLoadFailure,
        PdfEngineError::WorkerRuntime(_) => ErrorCategory::WorkerRuntimeFailure,
        PdfEngineError::ModuleLoad(_) => ErrorCategory::ModuleLoadFailure,
        PdfEngineError::InvalidDocument(_) => ErrorCategory::CorruptOrInvalidDocument,
        PdfEngineError::Other(message) => classify_message(message),
    };

    ExtractionFailure::new(category, error.to_string())
}

/// Pattern table for errors that only carry a message. First match wins.
pub fn classify_message(message: &str) -> ErrorCategory {
    let lower = message.to_lowercase();

    if lower.contains("setting up") && lower.contains("worker failed") {
        ErrorCategory::WorkerLoadFailure
    } else if lower.contains("worker") {
        ErrorCategory::WorkerRuntimeFailure
    } else if lower.contains("dynamically imported module") || lower.contains("failed to load module")
    {
        ErrorCategory::ModuleLoadFailure
    } else if message.contains("InvalidPDFException") || message.contains("PDF") {
        ErrorCategory::CorruptOrInvalidDocument
    } else {
        ErrorCategory::UnknownExtractionFailure
    }
}
