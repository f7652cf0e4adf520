mod bundled_pdf_worker;
mod composite_text_extractor;
mod extractor_factory;
mod failure_classifier;
mod layered_pdf_adapter;
mod parsed_pages;
mod plain_text_adapter;
mod process_pdf_worker;
mod remote_worker_fetcher;
mod source_reader;
mod worker_pdf_engine;

pub use bundled_pdf_worker::BundledPdfWorker;
pub use composite_text_extractor::CompositeTextExtractor;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use failure_classifier::{classify_engine_error, classify_message};
pub use layered_pdf_adapter::{ExtractionAttempt, LayeredPdfAdapter};
pub use parsed_pages::ParsedPages;
pub use plain_text_adapter::PlainTextAdapter;
pub use process_pdf_worker::ProcessPdfWorker;
pub use remote_worker_fetcher::RemoteWorkerFetcher;
pub use worker_pdf_engine::WorkerPdfEngine;
