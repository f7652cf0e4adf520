use std::io::Write;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncReadExt;

use crate::application::ports::PdfEngineError;

const HEADER_LEN: usize = 4;

/// ELF, shebang script, Mach-O (both byte orders, 32/64-bit, fat) and PE.
const EXECUTABLE_MAGIC: [&[u8]; 8] = [
    b"\x7fELF",
    b"#!",
    b"\xfe\xed\xfa\xce",
    b"\xfe\xed\xfa\xcf",
    b"\xce\xfa\xed\xfe",
    b"\xcf\xfa\xed\xfe",
    b"\xca\xfe\xba\xbe",
    b"MZ",
];

fn is_executable_image(header: &[u8]) -> bool {
    EXECUTABLE_MAGIC.iter().any(|magic| header.starts_with(magic))
}

/// Downloads the worker executable once per URL into a cache directory.
///
/// Downloads are staged in a temp file and renamed into place, so two
/// extractions fetching the same worker never observe a partial file.
/// Only bodies that start with an executable header are installed.
pub struct RemoteWorkerFetcher {
    client: Client,
    cache_dir: PathBuf,
}

impl RemoteWorkerFetcher {
    pub fn new(client: Client, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn default_cache_dir() -> PathBuf {
        std::env::temp_dir().join("resume-expert").join("workers")
    }

    pub fn cached_path(&self, url: &str) -> PathBuf {
        let file_name: String = url
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();
        self.cache_dir.join(file_name)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<PathBuf, PdfEngineError> {
        let target = self.cached_path(url);
        if let Some(cached) = self.cached_worker(&target).await {
            return Ok(cached);
        }

        tokio::fs::create_dir_all(&self.cache_dir).await.map_err(|e| {
            PdfEngineError::WorkerSetup(format!(
                "failed to create worker cache {}: {e}",
                self.cache_dir.display()
            ))
        })?;

        let response = self.client.get(url).send().await.map_err(|e| {
            PdfEngineError::ModuleLoad(format!("failed to fetch worker from {url}: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(PdfEngineError::ModuleLoad(format!(
                "worker download from {url} returned {}",
                response.status()
            )));
        }

        let mut staged = tempfile::NamedTempFile::new_in(&self.cache_dir).map_err(|e| {
            PdfEngineError::WorkerSetup(format!("failed to stage worker download: {e}"))
        })?;

        let mut header = Vec::with_capacity(HEADER_LEN);
        let mut size: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                PdfEngineError::ModuleLoad(format!("worker download from {url} interrupted: {e}"))
            })?;
            let missing = HEADER_LEN.saturating_sub(header.len()).min(chunk.len());
            header.extend_from_slice(&chunk[..missing]);
            size += chunk.len() as u64;
            staged.write_all(&chunk).map_err(|e| {
                PdfEngineError::WorkerSetup(format!("failed to write worker download: {e}"))
            })?;
        }

        if !is_executable_image(&header) {
            return Err(PdfEngineError::ModuleLoad(format!(
                "worker download from {url} is not an executable ({size} bytes)"
            )));
        }

        make_executable(staged.path())?;
        staged.persist(&target).map_err(|e| {
            PdfEngineError::WorkerSetup(format!(
                "failed to install worker at {}: {}",
                target.display(),
                e.error
            ))
        })?;

        tracing::info!(path = %target.display(), bytes = size, "Worker downloaded");
        Ok(target)
    }

    /// Returns `target` when a previous download left a usable worker there.
    /// A cached file without an executable header is removed.
    async fn cached_worker(&self, target: &Path) -> Option<PathBuf> {
        let file = tokio::fs::File::open(target).await.ok()?;
        let size = file.metadata().await.ok()?.len();

        let mut header = Vec::with_capacity(HEADER_LEN);
        file.take(HEADER_LEN as u64)
            .read_to_end(&mut header)
            .await
            .ok()?;

        if is_executable_image(&header) {
            tracing::info!(path = %target.display(), bytes = size, "Using cached worker");
            return Some(target.to_path_buf());
        }

        tracing::warn!(
            path = %target.display(),
            bytes = size,
            "Cached worker is not an executable, downloading again"
        );
        if let Err(e) = tokio::fs::remove_file(target).await {
            tracing::warn!(error = %e, "Failed to remove invalid cached worker");
        }
        None
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), PdfEngineError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
        PdfEngineError::WorkerSetup(format!("failed to mark worker executable: {e}"))
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), PdfEngineError> {
    Ok(())
}
