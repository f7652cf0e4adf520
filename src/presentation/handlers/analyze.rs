use std::path::Path;

use crate::presentation::state::AppState;

use super::input::{load_text, source_from_arg};

#[tracing::instrument(skip(state))]
pub async fn analyze_handler(state: &AppState, resume: &Path, job: &Path) -> anyhow::Result<()> {
    let resume = load_text(state, &source_from_arg(resume, None).await?).await?;
    let job = load_text(state, &source_from_arg(job, None).await?).await?;

    let report = state.resume_service.analyze(&resume, &job).await?;

    println!("Match score: {}", report.score);
    if !report.keywords.is_empty() {
        println!("\nKeywords:");
        for keyword in &report.keywords {
            println!("  - {keyword}");
        }
    }
    if !report.enhancements.is_empty() {
        println!("\nSuggested enhancements:");
        for enhancement in &report.enhancements {
            println!("  - {enhancement}");
        }
    }
    Ok(())
}
