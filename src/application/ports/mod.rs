mod analysis_client;
mod pdf_engine;
mod text_extractor;

pub use analysis_client::{AnalysisClient, AnalysisClientError};
pub use pdf_engine::{PdfDocumentHandle, PdfEngine, PdfEngineError};
pub use text_extractor::TextExtractor;
