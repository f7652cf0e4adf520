use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::TextExtractor;
use crate::domain::{ContentType, ExtractionFailure, ExtractionId, ExtractionOutcome, SourceFile};

/// Dispatches a file to the extractor registered for its content type.
pub struct CompositeTextExtractor {
    adapters: HashMap<ContentType, Arc<dyn TextExtractor>>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    #[tracing::instrument(
        skip(self, file),
        fields(
            extraction_id = %ExtractionId::new().as_uuid(),
            filename = %file.filename,
            media_type = %file.media_type,
        )
    )]
    async fn extract(&self, file: &SourceFile) -> ExtractionOutcome {
        let adapter = file
            .content_type()
            .and_then(|ct| self.adapters.get(&ct))
            .ok_or_else(|| ExtractionFailure::unsupported(&file.filename, &file.media_type))?;

        let outcome = adapter.extract(file).await;

        match &outcome {
            Ok(text) => tracing::info!(chars = text.chars().count(), "Text extraction complete"),
            Err(failure) => tracing::warn!(
                category = %failure.category,
                detail = %failure.detail,
                "Text extraction failed"
            ),
        }

        outcome
    }
}
