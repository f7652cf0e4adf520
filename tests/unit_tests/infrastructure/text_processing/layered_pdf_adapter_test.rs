use std::sync::Arc;

use resume_expert::application::ports::{PdfEngineError, TextExtractor};
use resume_expert::domain::{ErrorCategory, SourceFile, WorkerConfig, WorkerSource};
use resume_expert::infrastructure::text_processing::{ExtractionAttempt, LayeredPdfAdapter};

use crate::helpers::{Script, ScriptedPdfEngine};

const LOCAL_WORKER: &str = "/opt/test/pdftotext";

fn local() -> WorkerSource {
    WorkerSource::LocalFile(LOCAL_WORKER.into())
}

fn config() -> WorkerConfig {
    WorkerConfig::with_defaults(true, LOCAL_WORKER, None)
}

fn adapter(engine: &Arc<ScriptedPdfEngine>, config: WorkerConfig) -> LayeredPdfAdapter {
    LayeredPdfAdapter::new(engine.clone(), config)
}

fn pdf(name: &str) -> SourceFile {
    SourceFile::from_bytes(name, "application/pdf", &b"%PDF-1.7 test"[..])
}

#[tokio::test]
async fn given_three_pages_with_trailing_empty_items_when_extracting_then_joins_and_trims() {
    let engine = Arc::new(ScriptedPdfEngine::new().with_worker(
        WorkerSource::Bundled,
        Script::Pages(vec![vec!["A", ""], vec!["B", ""], vec!["C", ""]]),
    ));

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    assert_eq!(result.unwrap(), "A \nB \nC");
}

#[tokio::test]
async fn given_primary_succeeds_when_extracting_then_fallback_is_never_opened() {
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(WorkerSource::Bundled, Script::Pages(vec![vec!["primary"]]))
            .with_worker(local(), Script::Pages(vec![vec!["fallback"]])),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    assert_eq!(result.unwrap(), "primary");
    assert_eq!(engine.opens(), vec![WorkerSource::Bundled]);
}

#[tokio::test]
async fn given_primary_fails_and_fallback_succeeds_when_extracting_then_returns_fallback_text() {
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(
                WorkerSource::Bundled,
                Script::FailOpen(PdfEngineError::WorkerRuntime("crashed".to_string())),
            )
            .with_worker(local(), Script::Pages(vec![vec!["Jane", "Doe"], vec!["Rust"]])),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    assert_eq!(result.unwrap(), "Jane Doe\nRust");
    assert_eq!(engine.opens(), vec![WorkerSource::Bundled, local()]);
}

#[tokio::test]
async fn given_unresolvable_bundled_worker_when_extracting_then_primary_uses_next_preference() {
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_unresolvable_worker(WorkerSource::Bundled, Script::Pages(vec![vec!["never"]]))
            .with_worker(local(), Script::Pages(vec![vec!["local text"]])),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    assert_eq!(result.unwrap(), "local text");
    assert_eq!(engine.opens(), vec![local()]);
}

#[tokio::test]
async fn given_nothing_resolvable_when_extracting_then_both_attempts_force_local_worker() {
    let engine = Arc::new(ScriptedPdfEngine::new().with_unresolvable_worker(
        local(),
        Script::FailOpen(PdfEngineError::InvalidDocument("bad xref".to_string())),
    ));

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    let failure = result.unwrap_err();
    assert_eq!(failure.category, ErrorCategory::CorruptOrInvalidDocument);
    assert_eq!(engine.opens(), vec![local(), local()]);
}

#[tokio::test]
async fn given_setting_up_worker_failed_on_both_attempts_when_extracting_then_worker_load_failure()
{
    let error = PdfEngineError::Other("Setting up fake worker failed".to_string());
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(WorkerSource::Bundled, Script::FailOpen(error.clone()))
            .with_worker(local(), Script::FailOpen(error)),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    let failure = result.unwrap_err();
    assert_eq!(failure.category, ErrorCategory::WorkerLoadFailure);
    assert_eq!(
        failure.user_message(),
        "PDF worker failed to load. Please try again or use a .txt file instead."
    );
}

#[tokio::test]
async fn given_both_attempts_fail_differently_when_extracting_then_only_last_error_is_classified() {
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(
                WorkerSource::Bundled,
                Script::FailOpen(PdfEngineError::InvalidDocument("first".to_string())),
            )
            .with_worker(
                local(),
                Script::FailOpen(PdfEngineError::ModuleLoad("second".to_string())),
            ),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    let failure = result.unwrap_err();
    assert_eq!(failure.category, ErrorCategory::ModuleLoadFailure);
    assert!(failure.detail.contains("second"));
    assert!(!failure.detail.contains("first"));
}

#[tokio::test]
async fn given_page_error_when_extracting_then_attempt_aborts_before_later_pages() {
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(
                WorkerSource::Bundled,
                Script::FailOnPage {
                    pages: 4,
                    failing_page: 2,
                    error: PdfEngineError::WorkerRuntime("page 2 unreadable".to_string()),
                },
            )
            .with_worker(local(), Script::Pages(vec![vec!["recovered"]])),
    );

    let result = adapter(&engine, config()).extract(&pdf("resume.pdf")).await;

    assert_eq!(result.unwrap(), "recovered");
    assert_eq!(engine.pages_read(), vec![1, 2]);
}

#[tokio::test]
async fn given_zero_page_document_when_extracting_then_returns_empty_text() {
    let engine =
        Arc::new(ScriptedPdfEngine::new().with_worker(WorkerSource::Bundled, Script::Pages(vec![])));

    let result = adapter(&engine, config()).extract(&pdf("empty.pdf")).await;

    assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn given_unknown_message_on_both_attempts_when_extracting_then_detail_is_verbatim() {
    let error = PdfEngineError::Other("disk quota exceeded".to_string());
    let engine = Arc::new(
        ScriptedPdfEngine::new()
            .with_worker(WorkerSource::Bundled, Script::FailOpen(error.clone()))
            .with_worker(local(), Script::FailOpen(error)),
    );

    let failure = adapter(&engine, config())
        .extract(&pdf("resume.pdf"))
        .await
        .unwrap_err();

    assert_eq!(failure.category, ErrorCategory::UnknownExtractionFailure);
    assert_eq!(failure.user_message(), "PDF processing failed: disk quota exceeded");
}

#[tokio::test]
async fn given_text_file_when_extracting_with_pdf_adapter_then_unsupported_and_engine_untouched() {
    let engine = Arc::new(ScriptedPdfEngine::new());
    let file = SourceFile::from_bytes("notes.txt", "text/plain", &b"hello"[..]);

    let result = adapter(&engine, config()).extract(&file).await;

    assert_eq!(result.unwrap_err().category, ErrorCategory::UnsupportedType);
    assert!(engine.opens().is_empty());
}

#[tokio::test]
async fn given_missing_pdf_path_when_extracting_then_read_failure_without_attempts() {
    let engine = Arc::new(ScriptedPdfEngine::new());
    let file = SourceFile::from_path("/nonexistent/dir/resume.pdf", "");

    let result = adapter(&engine, config()).extract(&file).await;

    assert_eq!(result.unwrap_err().category, ErrorCategory::ReadFailure);
    assert!(engine.opens().is_empty());
}

#[tokio::test]
async fn given_concurrent_calls_when_extracting_then_outcomes_are_independent() {
    let engine = Arc::new(
        ScriptedPdfEngine::new().with_worker(WorkerSource::Bundled, Script::EchoPayload),
    );
    let adapter = Arc::new(adapter(&engine, config()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let adapter = Arc::clone(&adapter);
            tokio::spawn(async move {
                let file =
                    SourceFile::from_bytes(format!("r{i}.pdf"), "application/pdf", format!("doc {i}"));
                adapter.extract(&file).await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap().unwrap(), format!("doc {i}"));
    }
    assert_eq!(engine.opens().len(), 8);
}

#[test]
fn given_config_when_listing_attempts_then_primary_precedes_forced_local() {
    let engine = Arc::new(ScriptedPdfEngine::new());
    let config = config();

    let attempts = adapter(&engine, config.clone()).attempts();

    assert_eq!(
        attempts,
        vec![
            ExtractionAttempt::Primary(config.preference().to_vec()),
            ExtractionAttempt::Forced(local()),
        ]
    );
}
