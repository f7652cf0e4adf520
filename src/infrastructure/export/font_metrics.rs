//! Helvetica advance widths from the standard Type 1 AFM, in 1/1000 em,
//! and the WinAnsiEncoding byte for each character the font can draw.
//!
//! Index = (char as usize) - 32, covering 0x20 (space) through 0x7E (~).
//! Characters outside the tables use the width of `n`.

const POINTS_PER_MM: f32 = 72.0 / 25.4;
const FALLBACK_WIDTH: u16 = 556;
const UNMAPPABLE: u8 = b'?';

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

/// WinAnsi slots 0x80..=0x9F that differ from Latin-1: (char, byte, width).
#[rustfmt::skip]
const WIN_ANSI_EXTRAS: [(char, u8, u16); 27] = [
    ('\u{20AC}', 0x80, 556),  // Euro
    ('\u{201A}', 0x82, 222),  // quotesinglbase
    ('\u{0192}', 0x83, 556),  // florin
    ('\u{201E}', 0x84, 333),  // quotedblbase
    ('\u{2026}', 0x85, 1000), // ellipsis
    ('\u{2020}', 0x86, 556),  // dagger
    ('\u{2021}', 0x87, 556),  // daggerdbl
    ('\u{02C6}', 0x88, 333),  // circumflex
    ('\u{2030}', 0x89, 1000), // perthousand
    ('\u{0160}', 0x8A, 667),  // Scaron
    ('\u{2039}', 0x8B, 333),  // guilsinglleft
    ('\u{0152}', 0x8C, 1000), // OE
    ('\u{017D}', 0x8E, 611),  // Zcaron
    ('\u{2018}', 0x91, 222),  // quoteleft
    ('\u{2019}', 0x92, 222),  // quoteright
    ('\u{201C}', 0x93, 333),  // quotedblleft
    ('\u{201D}', 0x94, 333),  // quotedblright
    ('\u{2022}', 0x95, 350),  // bullet
    ('\u{2013}', 0x96, 556),  // endash
    ('\u{2014}', 0x97, 1000), // emdash
    ('\u{02DC}', 0x98, 333),  // tilde
    ('\u{2122}', 0x99, 1000), // trademark
    ('\u{0161}', 0x9A, 500),  // scaron
    ('\u{203A}', 0x9B, 333),  // guilsinglright
    ('\u{0153}', 0x9C, 944),  // oe
    ('\u{017E}', 0x9E, 500),  // zcaron
    ('\u{0178}', 0x9F, 667),  // Ydieresis
];

fn win_ansi_extra(c: char) -> Option<(u8, u16)> {
    WIN_ANSI_EXTRAS
        .iter()
        .find(|(ch, _, _)| *ch == c)
        .map(|&(_, byte, width)| (byte, width))
}

fn char_width_units(c: char) -> u16 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else {
        win_ansi_extra(c).map_or(FALLBACK_WIDTH, |(_, width)| width)
    }
}

/// WinAnsiEncoding byte for `c`. The C1 control range has no glyphs.
fn win_ansi_byte(c: char) -> Option<u8> {
    let code = u32::from(c);
    match code {
        0x00..=0x7F | 0xA0..=0xFF => u8::try_from(code).ok(),
        _ => win_ansi_extra(c).map(|(byte, _)| byte),
    }
}

/// Encodes `text` for a WinAnsi base-14 font; unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(UNMAPPABLE))
        .collect()
}

/// Rendered width of `text` in millimetres at `font_size_pt`.
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width_units(c))).sum();
    units as f32 / 1000.0 * font_size_pt / POINTS_PER_MM
}

pub fn mm_to_points(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}
