use std::path::Path;

use resume_expert::domain::{ContentType, SourcePayload};
use resume_expert::presentation::handlers::{UPLOAD_HINT, source_from_arg};

#[tokio::test]
async fn given_docx_path_when_building_source_then_asks_for_txt_or_pdf() {
    let result = source_from_arg(Path::new("resume.docx"), None).await;

    assert_eq!(result.unwrap_err().to_string(), UPLOAD_HINT);
}

#[tokio::test]
async fn given_pdf_path_when_building_source_then_payload_is_lazy() {
    let file = source_from_arg(Path::new("/nonexistent/resume.pdf"), None)
        .await
        .unwrap();

    assert_eq!(file.filename, "resume.pdf");
    assert_eq!(file.content_type(), Some(ContentType::Pdf));
    assert!(matches!(file.payload, SourcePayload::Path(_)));
}

#[tokio::test]
async fn given_media_type_override_when_building_source_then_it_wins_over_suffix() {
    let file = source_from_arg(Path::new("upload.bin"), Some("application/pdf"))
        .await
        .unwrap();

    assert_eq!(file.content_type(), Some(ContentType::Pdf));
}
