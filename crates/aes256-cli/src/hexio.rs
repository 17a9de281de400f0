//! Hex parsing and display helpers.

use anyhow::{bail, Context, Result};

/// Strips surrounding whitespace, inner spaces and dashes.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Decodes hex of any even length.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(normalize(input)).context("invalid hex")
}

/// Decodes hex that must describe exactly `expected` bytes.
pub fn parse_hex_exact(input: &str, expected: usize) -> Result<Vec<u8>> {
    let digits = normalize(input);
    if digits.len() != expected * 2 {
        bail!(
            "expected {} hex characters, got {}",
            expected * 2,
            digits.len()
        );
    }
    hex::decode(digits).context("invalid hex")
}

/// Formats bytes as space-separated hex pairs, `per_line` bytes per line.
pub fn format_grouped(data: &[u8], per_line: usize) -> Vec<String> {
    data.chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|b| format!("{b:02x}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Returns the bytes as text when they are valid UTF-8 with no control characters.
pub fn printable_text(data: &[u8]) -> Option<&str> {
    let text = std::str::from_utf8(data).ok()?;
    (!text.is_empty() && !text.chars().any(char::is_control)).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("  00 11-22\t33 "), "00112233");
    }

    #[test]
    fn exact_length_enforced() {
        assert!(parse_hex_exact("0011", 2).is_ok());
        let err = parse_hex_exact("001122", 2).unwrap_err();
        assert_eq!(err.to_string(), "expected 4 hex characters, got 6");
        assert!(parse_hex_exact("zz11", 2).is_err());
    }

    #[test]
    fn grouped_output_wraps_lines() {
        let data: Vec<u8> = (0..20).collect();
        let lines = format_grouped(&data, 16);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "10 11 12 13");
        assert!(lines[0].starts_with("00 01 02"));
    }

    #[test]
    fn printable_detection() {
        assert_eq!(printable_text(b"hello world"), Some("hello world"));
        assert_eq!(printable_text(b"line\n"), None);
        assert_eq!(printable_text(&[0xff, 0xfe]), None);
        assert_eq!(printable_text(b""), None);
    }
}
