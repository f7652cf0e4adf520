use chrono::NaiveDate;
use lopdf::Document;
use lopdf::content::Content;
use resume_expert::infrastructure::export::{CoverLetterRenderer, PageLayout, export_filename};

#[test]
fn given_short_letter_when_rendering_then_produces_single_page_pdf() {
    let renderer = CoverLetterRenderer::new(PageLayout::default());

    let bytes = renderer
        .render("Dear hiring manager,\n\nI would love to join.")
        .unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    let document = Document::load_mem(&bytes).unwrap();
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn given_letter_longer_than_a_page_when_rendering_then_paginates() {
    let renderer = CoverLetterRenderer::new(PageLayout::default());
    let content = (0..80)
        .map(|i| format!("Paragraph line {i}"))
        .collect::<Vec<_>>()
        .join("\n");

    let bytes = renderer.render(&content).unwrap();

    let document = Document::load_mem(&bytes).unwrap();
    assert_eq!(document.get_pages().len(), 3);
}

fn first_page_strings(bytes: &[u8]) -> Vec<Vec<u8>> {
    let document = Document::load_mem(bytes).unwrap();
    let (_, page_id) = document.get_pages().into_iter().next().unwrap();
    let content = Content::decode(&document.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|operation| operation.operator == "Tj")
        .map(|operation| operation.operands[0].as_str().unwrap().to_vec())
        .collect()
}

#[test]
fn given_typographic_punctuation_when_rendering_then_encodes_win_ansi_bytes() {
    let renderer = CoverLetterRenderer::new(PageLayout::default());

    let bytes = renderer
        .render("I\u{2019}m excited \u{201C}really\u{201D} \u{2014} \u{20AC}5 \u{2013} \u{2018}ok\u{2026}")
        .unwrap();

    assert_eq!(
        first_page_strings(&bytes),
        vec![b"I\x92m excited \x93really\x94 \x97 \x805 \x96 \x91ok\x85".to_vec()]
    );
}

#[test]
fn given_latin1_and_unmappable_characters_when_rendering_then_only_unmappable_become_question_marks() {
    let renderer = CoverLetterRenderer::new(PageLayout::default());

    let bytes = renderer.render("Na\u{EF}ve caf\u{E9} \u{2713} \u{65E5}\u{672C}").unwrap();

    assert_eq!(
        first_page_strings(&bytes),
        vec![b"Na\xEFve caf\xE9 ? ??".to_vec()]
    );
}

#[test]
fn given_c1_control_character_when_rendering_then_does_not_leak_win_ansi_glyph() {
    let renderer = CoverLetterRenderer::new(PageLayout::default());

    let bytes = renderer.render("a\u{92}b").unwrap();

    assert_eq!(first_page_strings(&bytes), vec![b"a?b".to_vec()]);
}

#[test]
fn given_title_and_date_when_naming_export_then_slugifies() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    assert_eq!(
        export_filename("Cover  Letter", date),
        "cover-letter-2024-03-01.pdf"
    );
}
