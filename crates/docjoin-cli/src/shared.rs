use std::path::Path;

use docjoin::{ExtractWarning, InputFormat, RawInput};

/// Read a file into a `RawInput`, honoring a declared format override or
/// sniffing from the file name and bytes.
pub fn read_input(path: &Path, declared: Option<InputFormat>) -> Result<RawInput, i32> {
    let bytes = std::fs::read(path).map_err(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        1
    })?;
    match declared {
        Some(format) => Ok(RawInput::new(bytes, format)),
        None => {
            let name = path.file_name().and_then(|n| n.to_str());
            RawInput::sniffed(bytes, name).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })
        }
    }
}

/// Print extraction warnings to stderr, one per line.
pub fn print_warnings(warnings: &[ExtractWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}
