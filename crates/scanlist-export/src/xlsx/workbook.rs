use super::parts;
use super::{cell_ref, SharedStrings};
use crate::ExportError;
use chrono::{DateTime, Utc};
use scanlist_domain::ItemSheet;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Single-sheet workbook: a header row followed by data rows, all text.
#[derive(Debug, Clone)]
pub struct XlsxWorkbook {
    sheet_name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    created: DateTime<Utc>,
}

impl XlsxWorkbook {
    pub fn new(sheet_name: impl Into<String>, headers: Vec<String>) -> Result<Self, ExportError> {
        let sheet_name = sheet_name.into();
        validate_sheet_name(&sheet_name)?;
        Ok(Self {
            sheet_name,
            headers,
            rows: Vec::new(),
            created: Utc::now(),
        })
    }

    pub fn from_sheet(sheet: &ItemSheet) -> Result<Self, ExportError> {
        let mut workbook = Self::new(sheet.name.clone(), sheet.headers.clone())?;
        for row in &sheet.rows {
            let values = ItemSheet::row_values(row)
                .into_iter()
                .map(str::to_string)
                .collect();
            workbook.push_row(values);
        }
        Ok(workbook)
    }

    pub fn push_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Used range, `A1` when the sheet holds at most one cell.
    fn dimension(&self) -> String {
        let last_row = (self.rows.len() + 1) as u32;
        let last_col = self.column_count().max(1) as u32 - 1;
        if last_row == 1 && last_col == 0 {
            "A1".to_string()
        } else {
            format!("A1:{}", cell_ref(last_col, last_row))
        }
    }

    /// Worksheet XML; interns every cell value into `strings`.
    pub(crate) fn sheet_xml(&self, strings: &mut SharedStrings) -> String {
        let mut xml = String::with_capacity(512 + self.rows.len() * 64);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#);
        xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
        let _ = write!(xml, r#"<dimension ref="{}"/>"#, self.dimension());
        xml.push_str("<sheetData>");

        let all_rows = std::iter::once(&self.headers).chain(self.rows.iter());
        for (row_idx, values) in all_rows.enumerate() {
            let row_num = row_idx as u32 + 1;
            let _ = write!(xml, r#"<row r="{}">"#, row_num);
            for (col_idx, value) in values.iter().enumerate() {
                let idx = strings.add(value);
                let _ = write!(
                    xml,
                    r#"<c r="{}" t="s"><v>{}</v></c>"#,
                    cell_ref(col_idx as u32, row_num),
                    idx
                );
            }
            xml.push_str("</row>");
        }

        xml.push_str("</sheetData></worksheet>");
        xml
    }

    /// Encode the package as `.xlsx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut strings = SharedStrings::new();
        let sheet = self.sheet_xml(&mut strings);

        let parts = [
            (parts::CONTENT_TYPES, parts::content_types()),
            (parts::ROOT_RELS, parts::root_rels()),
            (parts::APP_PROPS, parts::app_props(&self.sheet_name)),
            (parts::CORE_PROPS, parts::core_props(self.created)),
            (parts::WORKBOOK, parts::workbook(&self.sheet_name)),
            (parts::WORKBOOK_RELS, parts::workbook_rels()),
            (parts::STYLES, parts::styles()),
            (parts::SHARED_STRINGS, strings.to_xml()),
            (parts::SHEET1, sheet),
        ];

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer.start_file(name, options)?;
            writer
                .write_all(content.as_bytes())
                .map_err(|e| ExportError::Encode(e.to_string()))?;
        }
        let cursor = writer.finish()?;

        let bytes = cursor.into_inner();
        tracing::debug!(
            "Encoded workbook '{}' with {} data rows ({} bytes)",
            self.sheet_name,
            self.rows.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn validate_sheet_name(name: &str) -> Result<(), ExportError> {
    if name.is_empty() {
        return Err(ExportError::Encode("sheet name is empty".to_string()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ExportError::Encode(format!(
            "sheet name '{}' exceeds {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        return Err(ExportError::Encode(format!(
            "sheet name '{}' contains '{}'",
            name, c
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(ExportError::Encode(format!(
            "sheet name '{}' starts or ends with an apostrophe",
            name
        )));
    }
    Ok(())
}
