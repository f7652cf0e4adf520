use serde::{Deserialize, Serialize};

/// Body shared by the analysis and generation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSubmission {
    pub resume: String,
    pub job_description: String,
}

impl ResumeSubmission {
    pub fn new(resume: &str, job_description: &str) -> Self {
        Self {
            resume: resume.trim().to_string(),
            job_description: job_description.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.resume.is_empty() && !self.job_description.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub enhancements: Vec<String>,
}

/// Generation response; older deployments answer with `coverLetter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl CoverLetter {
    pub fn into_text(self) -> String {
        self.letter
            .filter(|l| !l.is_empty())
            .or(self.cover_letter)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfExportRequest {
    pub content: String,
    pub title: String,
}
