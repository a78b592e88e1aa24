use super::escape_xml;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

/// Shared strings table (`xl/sharedStrings.xml`).
///
/// Every text cell points at an index in this table; repeated values share
/// one entry.
#[derive(Debug, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
    index: HashMap<String, usize>,
    references: usize,
}

impl SharedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s` and return its index. Counts one cell reference.
    pub fn add(&mut self, s: &str) -> usize {
        self.references += 1;
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.strings.len();
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        idx
    }

    /// Render the table. `count` is the number of cell references and
    /// `uniqueCount` the number of distinct strings.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.strings.len() * 32);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        let _ = write!(
            xml,
            r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.references,
            self.strings.len()
        );
        for s in &self.strings {
            // Excel trims unmarked leading/trailing whitespace on load.
            if s.trim() != s {
                let _ = write!(xml, r#"<si><t xml:space="preserve">{}</t></si>"#, escape_xml(s));
            } else {
                let _ = write!(xml, "<si><t>{}</t></si>", escape_xml(s));
            }
        }
        xml.push_str("</sst>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_share_an_entry() {
        let mut sst = SharedStrings::new();
        assert_eq!(sst.add("Milk"), 0);
        assert_eq!(sst.add("Eggs"), 1);
        assert_eq!(sst.add("Milk"), 0);
        assert!(sst
            .to_xml()
            .ends_with("<si><t>Milk</t></si><si><t>Eggs</t></si></sst>"));
    }

    #[test]
    fn test_to_xml_counts_and_preserves_padding() {
        let mut sst = SharedStrings::new();
        sst.add("Text");
        sst.add(" padded ");
        sst.add("Text");

        let xml = sst.to_xml();
        assert!(xml.contains(r#"count="3" uniqueCount="2""#));
        assert!(xml.contains("<si><t>Text</t></si>"));
        assert!(xml.contains(r#"<si><t xml:space="preserve"> padded </t></si>"#));
    }
}
