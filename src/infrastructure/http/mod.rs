mod http_analysis_client;

pub use http_analysis_client::{
    ANALYZE_ENDPOINT, DEFAULT_API_BASE_URL, GENERATE_ENDPOINT, HttpAnalysisClient, PDF_ENDPOINT,
};
