use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use super::font_metrics::{encode_win_ansi, mm_to_points};
use super::page_layout::{PageLayout, PlacedLine};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode page content: {0}")]
    Encoding(String),
    #[error("failed to write PDF: {0}")]
    Write(String),
}

/// Renders plain text into a paginated Helvetica PDF.
pub struct CoverLetterRenderer {
    layout: PageLayout,
}

impl CoverLetterRenderer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    #[tracing::instrument(skip(self, content), fields(chars = content.len()))]
    pub fn render(&self, content: &str) -> Result<Vec<u8>, ExportError> {
        let pages = self.layout.paginate(self.layout.wrap(content));

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids = Vec::with_capacity(pages.len());
        for lines in &pages {
            let content = Content {
                operations: self.page_operations(lines),
            };
            let encoded = content
                .encode()
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(page_count),
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(mm_to_points(self.layout.page_width_mm)),
                    Object::Real(mm_to_points(self.layout.page_height_mm)),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::Write(e.to_string()))?;

        tracing::info!(page_count, bytes = buffer.len(), "Cover letter rendered");
        Ok(buffer)
    }

    fn page_operations(&self, lines: &[PlacedLine]) -> Vec<Operation> {
        let x = mm_to_points(self.layout.margin_mm);
        let mut operations = Vec::with_capacity(lines.len() + 2);

        for line in lines {
            let y = mm_to_points(self.layout.page_height_mm - line.y_mm);
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), Object::Real(self.layout.font_size_pt)],
            ));
            operations.push(Operation::new("Td", vec![Object::Real(x), Object::Real(y)]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&line.text))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        operations
    }
}

/// `Cover Letter` on 2024-03-01 becomes `cover-letter-2024-03-01.pdf`.
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}-{}.pdf", date.format("%Y-%m-%d"))
}
