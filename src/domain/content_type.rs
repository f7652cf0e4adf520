const TEXT_MIME: &str = "text/plain";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Pdf,
}

impl ContentType {
    /// Routes a file by its declared media type or filename suffix, plain text first.
    ///
    /// File contents are never inspected.
    pub fn detect(media_type: &str, filename: &str) -> Option<Self> {
        let by_mime = Self::from_mime(media_type);
        let by_name = Self::from_extension(filename);

        [Self::Text, Self::Pdf]
            .into_iter()
            .find(|ct| by_mime == Some(*ct) || by_name == Some(*ct))
    }

    /// Matches the media type essence, ignoring parameters such as `charset`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            TEXT_MIME => Some(Self::Text),
            PDF_MIME => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_extension(filename: &str) -> Option<Self> {
        let name = filename.to_lowercase();
        [Self::Text, Self::Pdf]
            .into_iter()
            .find(|ct| name.ends_with(ct.extension()))
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Text => TEXT_MIME,
            Self::Pdf => PDF_MIME,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => ".txt",
            Self::Pdf => ".pdf",
        }
    }
}
