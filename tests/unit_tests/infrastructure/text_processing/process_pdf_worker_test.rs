#![cfg(unix)]

use std::path::Path;

use resume_expert::application::ports::{PdfDocumentHandle, PdfEngineError};
use resume_expert::infrastructure::text_processing::ProcessPdfWorker;

// `sh <input> -` runs the payload as a script, which lets each test choose
// the worker's stdout, stderr and exit code.
const SHELL: &str = "/bin/sh";

#[tokio::test]
async fn given_form_feed_output_when_running_worker_then_returns_pages() {
    let mut pages = ProcessPdfWorker::run(Path::new(SHELL), b"printf 'Jane\\nDoe\\fSkills\\f'")
        .await
        .unwrap();

    assert_eq!(pages.page_count(), 2);
    assert_eq!(pages.text_items(1).await.unwrap(), vec!["Jane", "Doe"]);
    assert_eq!(pages.text_items(2).await.unwrap(), vec!["Skills"]);
}

#[tokio::test]
async fn given_exit_code_one_when_running_worker_then_invalid_document() {
    let result =
        ProcessPdfWorker::run(Path::new(SHELL), b"echo 'Syntax Error: bad xref' >&2; exit 1").await;

    match result {
        Err(PdfEngineError::InvalidDocument(stderr)) => {
            assert_eq!(stderr, "Syntax Error: bad xref");
        }
        other => panic!("expected invalid document, got {other:?}"),
    }
}

#[tokio::test]
async fn given_other_exit_code_when_running_worker_then_worker_runtime() {
    let result = ProcessPdfWorker::run(Path::new(SHELL), b"exit 2").await;

    assert!(matches!(result, Err(PdfEngineError::WorkerRuntime(_))));
}

#[tokio::test]
async fn given_missing_executable_when_running_worker_then_worker_setup() {
    let result = ProcessPdfWorker::run(Path::new("/nonexistent/bin/pdftotext"), b"%PDF").await;

    assert!(matches!(result, Err(PdfEngineError::WorkerSetup(_))));
}
