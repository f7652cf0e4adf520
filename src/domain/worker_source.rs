use std::fmt;
use std::path::{Path, PathBuf};

/// Version the remote worker download is pinned to.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_LOCAL_WORKER: &str = "/usr/bin/pdftotext";

const REMOTE_WORKER_FILE: &str = "pdf-worker";

/// Where the auxiliary PDF worker comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkerSource {
    /// Parser compiled into this binary, run on the blocking pool.
    Bundled,
    /// A pdftotext-compatible executable on local disk.
    LocalFile(PathBuf),
    /// The same executable fetched from a content-delivery URL.
    Remote(String),
}

impl WorkerSource {
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerSource::Bundled => "bundled",
            WorkerSource::LocalFile(_) => "local",
            WorkerSource::Remote(_) => "remote",
        }
    }
}

impl fmt::Display for WorkerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerSource::Bundled => write!(f, "bundled"),
            WorkerSource::LocalFile(path) => write!(f, "local:{}", path.display()),
            WorkerSource::Remote(url) => write!(f, "remote:{url}"),
        }
    }
}

/// Worker configuration injected into each PDF extraction.
///
/// Immutable once built, so concurrent extractions never share mutable
/// engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    preference: Vec<WorkerSource>,
    local_worker: PathBuf,
}

impl WorkerConfig {
    pub fn new(preference: Vec<WorkerSource>, local_worker: impl Into<PathBuf>) -> Self {
        Self {
            preference,
            local_worker: local_worker.into(),
        }
    }

    /// Bundled engine (when enabled), then the local worker file, then the
    /// remote copy pinned to [`ENGINE_VERSION`] when a base URL is known.
    pub fn with_defaults(
        bundled: bool,
        local_worker: impl Into<PathBuf>,
        remote_base_url: Option<&str>,
    ) -> Self {
        let local_worker = local_worker.into();
        let mut preference = Vec::with_capacity(3);

        if bundled {
            preference.push(WorkerSource::Bundled);
        }
        preference.push(WorkerSource::LocalFile(local_worker.clone()));
        if let Some(base) = remote_base_url {
            preference.push(WorkerSource::Remote(Self::remote_url(base, ENGINE_VERSION)));
        }

        Self {
            preference,
            local_worker,
        }
    }

    pub fn remote_url(base_url: &str, version: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            version,
            REMOTE_WORKER_FILE
        )
    }

    pub fn preference(&self) -> &[WorkerSource] {
        &self.preference
    }

    pub fn local_worker(&self) -> &Path {
        &self.local_worker
    }

    pub fn local_only(&self) -> WorkerSource {
        WorkerSource::LocalFile(self.local_worker.clone())
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::with_defaults(true, DEFAULT_LOCAL_WORKER, None)
    }
}
