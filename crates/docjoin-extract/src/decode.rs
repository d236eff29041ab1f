//! Text decoding for inputs that are not guaranteed UTF-8.

use docjoin_core::{ExtractWarning, ExtractWarningCode};

/// Decode input bytes to text.
///
/// Valid UTF-8 passes through unchanged (minus a leading BOM). Anything else
/// is decoded as Windows-1252 with a [`DecodeFallback`]
/// (ExtractWarningCode::DecodeFallback) warning recorded.
pub(crate) fn decode_text(bytes: &[u8], warnings: &mut Vec<ExtractWarning>) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{FEFF}').unwrap_or(text).to_string(),
        Err(_) => {
            warnings.push(ExtractWarning::new(
                ExtractWarningCode::DecodeFallback,
                "input is not valid UTF-8; decoded as Windows-1252",
            ));
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
