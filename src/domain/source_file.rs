use std::path::PathBuf;

use bytes::Bytes;

use super::content_type::ContentType;

/// Where the bytes of a [`SourceFile`] come from.
///
/// `Path` payloads are read lazily by the extraction strategy, so a file
/// rejected at dispatch is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePayload {
    Memory(Bytes),
    Path(PathBuf),
}

/// A user-supplied file, borrowed by the extractor for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: String,
    pub media_type: String,
    pub payload: SourcePayload,
}

impl SourceFile {
    pub fn from_bytes(
        filename: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            payload: SourcePayload::Memory(data.into()),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            filename,
            media_type: media_type.into(),
            payload: SourcePayload::Path(path),
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::detect(&self.media_type, &self.filename)
    }
}
