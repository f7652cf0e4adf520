use std::path::Path;

use crate::presentation::format::format_file_size;
use crate::presentation::state::AppState;

use super::input::{load_text, source_from_arg, source_size};

/// Prints the document text to stdout and a one-line summary to stderr.
#[tracing::instrument(skip(state))]
pub async fn extract_handler(
    state: &AppState,
    file: &Path,
    media_type: Option<&str>,
) -> anyhow::Result<()> {
    let source = source_from_arg(file, media_type).await?;
    let size = source_size(&source).await;
    let text = load_text(state, &source).await?;

    println!("{text}");

    let size = size.map(format_file_size).unwrap_or_else(|| "unknown size".to_string());
    eprintln!(
        "{}: {} characters extracted ({})",
        source.filename,
        text.chars().count(),
        size
    );
    Ok(())
}
