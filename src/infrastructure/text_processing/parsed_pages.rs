use async_trait::async_trait;

use crate::application::ports::{PdfDocumentHandle, PdfEngineError};

/// Page texts already produced by a worker, one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPages {
    pages: Vec<Vec<String>>,
}

impl ParsedPages {
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self { pages }
    }

    /// Splits pdftotext-style output: pages separated by form feeds, the
    /// last page followed by a trailing one.
    pub fn from_form_feed_output(output: &str) -> Self {
        let mut pages: Vec<&str> = output.split('\u{c}').collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        Self::new(
            pages
                .into_iter()
                .map(|page| page.lines().map(str::to_string).collect())
                .collect(),
        )
    }
}

#[async_trait]
impl PdfDocumentHandle for ParsedPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn text_items(&mut self, page_number: usize) -> Result<Vec<String>, PdfEngineError> {
        page_number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .cloned()
            .ok_or_else(|| {
                PdfEngineError::WorkerRuntime(format!("worker has no page {page_number}"))
            })
    }
}
