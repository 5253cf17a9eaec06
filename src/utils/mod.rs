//! Utility functions for mediacheck
//!
//! This module provides common utility functions used throughout the
//! application.

use anyhow::Result;

/// Format a byte count in human-readable form.
///
/// The unit is chosen by repeated division by 1024 (B through TB, clamped at
/// the top), the number is rounded to at most one decimal place with a
/// trailing `.0` dropped, and the integer part gets thousands separators.
/// Zero is rendered as `"0 B"` exactly.
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if size == 0 {
        return "0 B".to_string();
    }

    let mut value = size as f64;
    let mut unit_index = 0;

    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    let tenths = (value * 10.0).round() as u64;
    if tenths % 10 == 0 {
        format!("{} {}", with_thousands(tenths / 10), UNITS[unit_index])
    } else {
        format!(
            "{}.{} {}",
            with_thousands(tenths / 10),
            tenths % 10,
            UNITS[unit_index]
        )
    }
}

/// Insert thousands separators into a non-negative integer.
fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Get the current working directory
pub fn get_current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_exact() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_exact_unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(20 * 1024 * 1024), "20 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_one_decimal_place() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 + 100), "1.1 KB");
        // 5 MiB + 1 byte rounds back to "5 MB"
        assert_eq!(format_file_size(5 * 1024 * 1024 + 1), "5 MB");
    }

    #[test]
    fn test_thousands_separators_in_byte_range() {
        assert_eq!(format_file_size(1000), "1,000 B");
        assert_eq!(format_file_size(1023), "1,023 B");
    }

    #[test]
    fn test_unit_table_clamps_at_tb() {
        let tb = 1024u64.pow(4);
        assert_eq!(format_file_size(tb), "1 TB");
        assert_eq!(format_file_size(tb + tb / 2), "1.5 TB");
        // Beyond TB the value keeps growing instead of indexing out of range
        assert_eq!(format_file_size(2048 * tb), "2,048 TB");
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }
}
