mod resume_service;

pub use resume_service::{ResumeService, ResumeServiceError};
