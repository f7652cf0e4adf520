use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractionId(Uuid);

impl ExtractionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ExtractionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed set of reasons an extraction can end without text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    UnsupportedType,
    WorkerLoadFailure,
    WorkerRuntimeFailure,
    ModuleLoadFailure,
    CorruptOrInvalidDocument,
    ReadFailure,
    UnknownExtractionFailure,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::UnsupportedType => "UNSUPPORTED_TYPE",
            ErrorCategory::WorkerLoadFailure => "WORKER_LOAD_FAILURE",
            ErrorCategory::WorkerRuntimeFailure => "WORKER_RUNTIME_FAILURE",
            ErrorCategory::ModuleLoadFailure => "MODULE_LOAD_FAILURE",
            ErrorCategory::CorruptOrInvalidDocument => "CORRUPT_OR_INVALID_DOCUMENT",
            ErrorCategory::ReadFailure => "READ_FAILURE",
            ErrorCategory::UnknownExtractionFailure => "UNKNOWN_EXTRACTION_FAILURE",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal extraction failure. `detail` is for logs; users see [`ExtractionFailure::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.user_message())]
pub struct ExtractionFailure {
    pub category: ErrorCategory,
    pub detail: String,
}

impl ExtractionFailure {
    pub fn new(category: ErrorCategory, detail: impl Into<String>) -> Self {
        Self {
            category,
            detail: detail.into(),
        }
    }

    pub fn unsupported(filename: &str, media_type: &str) -> Self {
        Self::new(
            ErrorCategory::UnsupportedType,
            format!("{filename} ({media_type})"),
        )
    }

    pub fn user_message(&self) -> String {
        match self.category {
            ErrorCategory::UnsupportedType => {
                "Unsupported file type. Please use .txt or .pdf files.".to_string()
            }
            ErrorCategory::WorkerLoadFailure => {
                "PDF worker failed to load. Please try again or use a .txt file instead."
                    .to_string()
            }
            ErrorCategory::WorkerRuntimeFailure => {
                "PDF processing worker error. Try using a different PDF or convert it to text format."
                    .to_string()
            }
            ErrorCategory::ModuleLoadFailure => {
                "PDF library loading failed. Please check your internet connection and try again."
                    .to_string()
            }
            ErrorCategory::CorruptOrInvalidDocument => {
                "The PDF file appears to be corrupted or invalid. Please try a different file."
                    .to_string()
            }
            ErrorCategory::ReadFailure => "Failed to read file. Please try again.".to_string(),
            ErrorCategory::UnknownExtractionFailure => {
                format!("PDF processing failed: {}", self.detail)
            }
        }
    }
}

/// Either the extracted text (possibly empty) or a classified failure.
pub type ExtractionOutcome = Result<String, ExtractionFailure>;
