use std::path::PathBuf;

use resume_expert::domain::{ErrorCategory, SourceFile, WorkerSource};
use resume_expert::infrastructure::text_processing::{ExtractorFactory, ExtractorFactoryError};
use resume_expert::presentation::config::ExtractionSettings;

fn settings(bundled_worker: bool, local_worker_path: &str) -> ExtractionSettings {
    ExtractionSettings {
        bundled_worker,
        local_worker_path: PathBuf::from(local_worker_path),
        remote_worker_base_url: None,
        worker_cache_dir: None,
        timeout_secs: None,
    }
}

#[test]
fn given_empty_local_worker_path_when_creating_then_returns_error() {
    let result = ExtractorFactory::create(&settings(true, ""));

    assert!(matches!(result, Err(ExtractorFactoryError::MissingLocalWorker)));
}

#[test]
fn given_settings_with_remote_base_when_building_config_then_preference_has_three_sources() {
    let mut settings = settings(true, "/usr/bin/pdftotext");
    settings.remote_worker_base_url = Some("https://cdn.test".to_string());

    let config = ExtractorFactory::worker_config(&settings);

    assert_eq!(config.preference().len(), 3);
    assert_eq!(config.preference()[0], WorkerSource::Bundled);
    assert!(matches!(config.preference()[2], WorkerSource::Remote(_)));
}

#[cfg(unix)]
#[tokio::test]
async fn given_cat_as_local_worker_when_extracting_pdf_then_pages_come_from_process_output() {
    let extractor = ExtractorFactory::create(&settings(false, "/bin/cat")).unwrap();
    let file = SourceFile::from_bytes("resume.pdf", "application/pdf", &b"Hello\x0cWorld\x0c"[..]);

    let result = extractor.extract(&file).await;

    assert_eq!(result.unwrap(), "Hello\nWorld");
}

#[tokio::test]
async fn given_garbage_pdf_and_missing_local_worker_when_extracting_then_fallback_error_wins() {
    let extractor = ExtractorFactory::create(&settings(true, "/nonexistent/bin/pdftotext")).unwrap();
    let file = SourceFile::from_bytes("resume.pdf", "application/pdf", &b"not a pdf"[..]);

    let result = extractor.extract(&file).await;

    assert_eq!(result.unwrap_err().category, ErrorCategory::WorkerLoadFailure);
}
