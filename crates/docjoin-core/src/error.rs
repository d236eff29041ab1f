//! Warning and error types shared across the docjoin pipeline.
//!
//! Provides [`ExtractWarning`] for non-fatal issues collected during
//! extraction (a failing page or sheet never aborts its siblings) and
//! [`RenderError`] for failures while serializing results to delimited text.

use std::fmt;

/// Machine-readable warning code for categorizing extraction issues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// A page produced no usable text and was skipped.
    PageFailed,
    /// A spreadsheet sheet could not be read and was skipped.
    SheetFailed,
    /// Input bytes were not valid UTF-8; a lossy legacy decoding was used.
    DecodeFallback,
    /// A detected table had no data rows and was discarded.
    EmptyTable,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::PageFailed => "PAGE_FAILED",
            ExtractWarningCode::SheetFailed => "SHEET_FAILED",
            ExtractWarningCode::DecodeFallback => "DECODE_FALLBACK",
            ExtractWarningCode::EmptyTable => "EMPTY_TABLE",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered during extraction.
///
/// Warnings let extraction continue best-effort when a single unit (page,
/// sheet, row) produces nothing. They carry a structured code, a description,
/// and optional source context.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page number where the warning occurred (1-indexed), if applicable.
    pub page: Option<usize>,
    /// Sheet name associated with the warning, if applicable.
    pub sheet: Option<String>,
}

impl ExtractWarning {
    /// Create a warning with a code and description, no source context.
    pub fn new(code: ExtractWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            sheet: None,
        }
    }

    /// Attach page context, returning the modified warning.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach sheet context, returning the modified warning.
    pub fn on_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref sheet) = self.sheet {
            write!(f, " (sheet '{sheet}')")?;
        }
        Ok(())
    }
}

/// Error serializing a result to delimited text.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The underlying CSV writer reported a failure.
    Csv(String),
    /// The rendered bytes were not valid UTF-8.
    InvalidUtf8(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Csv(msg) => write!(f, "CSV write error: {msg}"),
            RenderError::InvalidUtf8(msg) => write!(f, "invalid UTF-8 in rendered output: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
