//! Input format tags and the raw input wrapper.

use std::fmt;

use crate::error::ExtractError;

/// Recognized input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Page-based PDF document.
    Pdf,
    /// Delimited text (comma/tab separated).
    Csv,
    /// Spreadsheet workbook (xlsx, xls, ods).
    Spreadsheet,
    /// Unstructured plain text.
    PlainText,
}

impl InputFormat {
    /// Returns the lowercase tag for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Pdf => "pdf",
            InputFormat::Csv => "csv",
            InputFormat::Spreadsheet => "spreadsheet",
            InputFormat::PlainText => "plaintext",
        }
    }

    /// Map a file extension (without dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(InputFormat::Pdf),
            "csv" | "tsv" => Some(InputFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(InputFormat::Spreadsheet),
            "txt" | "text" | "log" | "md" => Some(InputFormat::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded input: raw bytes plus a format tag.
///
/// Created once per input and discarded after extraction. The format tag is
/// either declared by the caller or sniffed from the file name and magic
/// bytes; an unrecognizable input is rejected here, before any extraction
/// runs.
#[derive(Debug, Clone)]
pub struct RawInput {
    bytes: Vec<u8>,
    format: InputFormat,
}

impl RawInput {
    /// Wrap bytes with a declared format tag.
    pub fn new(bytes: Vec<u8>, format: InputFormat) -> Self {
        Self { bytes, format }
    }

    /// Wrap bytes, sniffing the format from an optional file name and the
    /// leading bytes.
    ///
    /// Extension wins over magic bytes; content that is valid UTF-8 falls
    /// back to plain text. Returns
    /// [`ExtractError::UnsupportedFormat`] when nothing matches.
    pub fn sniffed(bytes: Vec<u8>, name_hint: Option<&str>) -> Result<Self, ExtractError> {
        let format = sniff_format(&bytes, name_hint).ok_or_else(|| {
            ExtractError::UnsupportedFormat(name_hint.unwrap_or("<unnamed input>").to_string())
        })?;
        Ok(Self { bytes, format })
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The format tag.
    pub fn format(&self) -> InputFormat {
        self.format
    }
}

fn sniff_format(bytes: &[u8], name_hint: Option<&str>) -> Option<InputFormat> {
    if let Some(ext) = name_hint.and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext)) {
        if let Some(format) = InputFormat::from_extension(ext) {
            return Some(format);
        }
    }
    if bytes.starts_with(b"%PDF-") {
        return Some(InputFormat::Pdf);
    }
    // xlsx/ods are zip containers; legacy xls is an OLE compound file.
    if bytes.starts_with(b"PK\x03\x04") || bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0]) {
        return Some(InputFormat::Spreadsheet);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(InputFormat::PlainText);
    }
    None
}
