use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::infrastructure::export::export_filename;
use crate::presentation::cli::ExportFormat;
use crate::presentation::state::AppState;

use super::input::{load_text, source_from_arg};

const REMOTE_PDF_FILENAME: &str = "cover-letter.pdf";

#[derive(Debug, Clone)]
pub struct CoverLetterOptions {
    pub format: ExportFormat,
    pub remote: bool,
    pub output: Option<PathBuf>,
}

/// Generates a letter, then prints it or writes it as text or PDF.
#[tracing::instrument(skip(state))]
pub async fn cover_letter_handler(
    state: &AppState,
    resume: &Path,
    job: &Path,
    options: CoverLetterOptions,
) -> anyhow::Result<()> {
    let resume = load_text(state, &source_from_arg(resume, None).await?).await?;
    let job = load_text(state, &source_from_arg(job, None).await?).await?;

    let letter = state.resume_service.generate_cover_letter(&resume, &job).await?;

    match options.format {
        ExportFormat::Text => match options.output {
            Some(path) => {
                tokio::fs::write(&path, letter.as_bytes())
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Cover letter saved to {}", path.display());
            }
            None => println!("{letter}"),
        },
        ExportFormat::Pdf => {
            let (bytes, default_name) = if options.remote {
                let bytes = state
                    .resume_service
                    .export_remote_pdf(&letter, &state.export_title)
                    .await?;
                (bytes.to_vec(), REMOTE_PDF_FILENAME.to_string())
            } else {
                let renderer = state.renderer.clone();
                let content = letter.clone();
                let bytes =
                    tokio::task::spawn_blocking(move || renderer.render(&content)).await??;
                let name = export_filename(&state.export_title, Local::now().date_naive());
                (bytes, name)
            };

            let path = options.output.unwrap_or_else(|| PathBuf::from(default_name));
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Cover letter PDF saved to {} ({} bytes)", path.display(), bytes.len());
        }
    }
    Ok(())
}
