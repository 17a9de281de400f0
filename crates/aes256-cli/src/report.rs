//! Result reports written by `--save` and the interactive mode.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Direction of the operation being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Inputs and output of one cipher invocation.
pub struct Report<'a> {
    pub direction: Direction,
    pub input: &'a [u8],
    pub key: &'a [u8],
    pub output: &'a [u8],
}

impl Report<'_> {
    /// Renders the report text.
    pub fn render(&self) -> String {
        let (title, first, last) = match self.direction {
            Direction::Encrypt => ("ENCRYPTION", "Plaintext ", "Ciphertext"),
            Direction::Decrypt => ("DECRYPTION", "Ciphertext", "Plaintext "),
        };
        let mut out = format!("AES-256 {title} RESULT\n{}\n\n", "=".repeat(70));
        out.push_str(&line(first, self.input));
        out.push_str(&line("Key       ", self.key));
        out.push_str(&line(last, self.output));
        out
    }

    /// Writes the rendered report to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).with_context(|| format!("write {}", path.display()))?;
        log::info!("saved report to {}", path.display());
        Ok(())
    }
}

fn line(label: &str, bytes: &[u8]) -> String {
    format!("{label} ({} bytes): {}\n", bytes.len(), hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_report_layout() {
        let report = Report {
            direction: Direction::Encrypt,
            input: &[0x00, 0x11],
            key: &[0xaa; 32],
            output: &[0xff; 16],
        };
        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "AES-256 ENCRYPTION RESULT");
        assert_eq!(lines[1].len(), 70);
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Plaintext  (2 bytes): 0011");
        assert_eq!(
            lines[4],
            format!("Key        (32 bytes): {}", "aa".repeat(32))
        );
        assert_eq!(
            lines[5],
            format!("Ciphertext (16 bytes): {}", "ff".repeat(16))
        );
    }

    #[test]
    fn save_writes_rendered_text() {
        let path = std::env::temp_dir().join(format!("aes256-report-{}.txt", std::process::id()));
        let report = Report {
            direction: Direction::Encrypt,
            input: b"abc",
            key: &[7; 32],
            output: &[9; 16],
        };
        report.save(&path).expect("save");
        let written = fs::read_to_string(&path).expect("read back");
        fs::remove_file(&path).expect("cleanup");
        assert_eq!(written, report.render());
    }

    #[test]
    fn save_to_missing_directory_names_path() {
        let path = std::env::temp_dir()
            .join(format!("aes256-missing-{}", std::process::id()))
            .join("report.txt");
        let report = Report {
            direction: Direction::Decrypt,
            input: &[1; 16],
            key: &[2; 32],
            output: &[],
        };
        let err = report.save(&path).unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }

    #[test]
    fn decrypt_report_lists_ciphertext_first() {
        let report = Report {
            direction: Direction::Decrypt,
            input: &[1; 16],
            key: &[2; 32],
            output: &[3; 4],
        };
        let text = report.render();
        assert!(text.starts_with("AES-256 DECRYPTION RESULT"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[3].starts_with("Ciphertext (16 bytes)"));
        assert_eq!(lines[5], "Plaintext  (4 bytes): 03030303");
    }
}
