mod analyze;
mod cover_letter;
mod extract;
mod input;

pub use analyze::analyze_handler;
pub use cover_letter::{CoverLetterOptions, cover_letter_handler};
pub use extract::extract_handler;
pub use input::{STDIN_ARG, UPLOAD_HINT, load_text, source_from_arg, source_size};
