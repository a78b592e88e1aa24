//! Minimal Office Open XML workbook writer.
//!
//! Produces a single-sheet `.xlsx` with every cell stored as a shared
//! string. Only what the item export needs is supported.

mod parts;
mod strings;
mod workbook;

pub use strings::SharedStrings;
pub use workbook::XlsxWorkbook;

/// Whether `c` is in the XML 1.0 `Char` production. Surrogates cannot
/// occur in a `char`, so only C0 controls and the two noncharacters
/// U+FFFE/U+FFFF are excluded.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Escape XML special characters and drop chars XML 1.0 cannot carry.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Column letters for a zero-based column index (0 → A, 26 → AA).
pub(crate) fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// A1-style reference for zero-based column and one-based row.
pub(crate) fn cell_ref(col: u32, row: u32) -> String {
    format!("{}{}", column_letters(col), row)
}
