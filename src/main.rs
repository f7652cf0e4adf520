use clap::Parser;

use resume_expert::infrastructure::observability::{TracingConfig, init_tracing};
use resume_expert::presentation::handlers::{
    CoverLetterOptions, analyze_handler, cover_letter_handler, extract_handler,
};
use resume_expert::presentation::{AppState, Cli, Command, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (environment, settings) = Settings::from_env()?;

    let json_format = settings.logging.json || TracingConfig::default().json_format;
    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.level.as_str(),
        json_format,
    ));

    let state = AppState::from_settings(&settings)?;

    match cli.command {
        Command::Extract { file, media_type } => {
            extract_handler(&state, &file, media_type.as_deref()).await
        }
        Command::Analyze { resume, job } => analyze_handler(&state, &resume, &job).await,
        Command::CoverLetter {
            resume,
            job,
            format,
            remote,
            output,
        } => {
            let options = CoverLetterOptions {
                format,
                remote,
                output,
            };
            cover_letter_handler(&state, &resume, &job, options).await
        }
    }
}
