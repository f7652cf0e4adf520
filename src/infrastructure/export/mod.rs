mod cover_letter_renderer;
mod font_metrics;
mod page_layout;

pub use cover_letter_renderer::{CoverLetterRenderer, ExportError, export_filename};
pub use font_metrics::text_width_mm;
pub use page_layout::{PageLayout, PlacedLine};
