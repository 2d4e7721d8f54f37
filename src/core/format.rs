use serde_json::Value;

use crate::error::InvalidSizeError;

const UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Human-readable byte count in powers of 1024, at most two decimals and no
/// trailing zeros: `1536` is `"1.5 KB"`, `0` is `"0 Bytes"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    // floor(log1024(n)) without floating point error at exact powers
    let index = (bytes.ilog2() / 10) as usize;
    let scaled = bytes as f64 / 1024f64.powi(index as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{rounded} {}", UNITS[index])
}

/// Formats a raw `size` value from the wire, rejecting anything that is not a
/// non-negative integer.
pub fn format_size(size: &Value) -> Result<String, InvalidSizeError> {
    if let Some(bytes) = size.as_u64() {
        return Ok(format_bytes(bytes));
    }

    match size.as_f64() {
        Some(bytes) if bytes >= 0.0 && bytes.fract() == 0.0 && bytes < u64::MAX as f64 => {
            Ok(format_bytes(bytes as u64))
        }
        _ => Err(InvalidSizeError(size.clone())),
    }
}
