use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "resume-expert", author, version, about = "Resume text extraction and cover letter tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the text of a .txt or .pdf document.
    Extract {
        /// Document path, or `-` for stdin.
        file: PathBuf,
        /// Overrides the media type guessed from the file name.
        #[arg(long)]
        media_type: Option<String>,
    },
    /// Score a resume against a job description.
    Analyze {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
    },
    /// Generate a cover letter and optionally export it.
    CoverLetter {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Render the PDF through the export endpoint instead of locally.
        #[arg(long)]
        remote: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Pdf,
}
