mod analysis;
mod content_type;
mod extraction;
mod source_file;
mod worker_source;

pub use analysis::{AnalysisReport, CoverLetter, PdfExportRequest, ResumeSubmission};
pub use content_type::ContentType;
pub use extraction::{ErrorCategory, ExtractionFailure, ExtractionId, ExtractionOutcome};
pub use source_file::{SourceFile, SourcePayload};
pub use worker_source::{DEFAULT_LOCAL_WORKER, ENGINE_VERSION, WorkerConfig, WorkerSource};
