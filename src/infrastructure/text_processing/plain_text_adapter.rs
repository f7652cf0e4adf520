use async_trait::async_trait;

use crate::application::ports::TextExtractor;
use crate::domain::{ContentType, ExtractionFailure, ExtractionOutcome, SourceFile};

use super::source_reader::read_source;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Decodes like a browser text reader: BOM dropped, invalid sequences replaced.
    pub fn decode(data: &[u8]) -> String {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        String::from_utf8_lossy(data).into_owned()
    }
}

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract(&self, file: &SourceFile) -> ExtractionOutcome {
        if file.content_type() != Some(ContentType::Text) {
            return Err(ExtractionFailure::unsupported(&file.filename, &file.media_type));
        }

        let data = read_source(file).await?;
        Ok(Self::decode(&data))
    }
}
