//! Menu-driven session over arbitrary reader/writer pairs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use aes256_core::{BLOCK_SIZE, KEY_SIZE};
use anyhow::Result;

use crate::hexio::{format_grouped, parse_hex, parse_hex_exact, printable_text};
use crate::ops::{apply, Mode};
use crate::report::{Direction, Report};

const RULE_WIDTH: usize = 70;
const DEFAULT_REPORT: &str = "result.txt";
const SAMPLE_BLOCK: &str = "00112233445566778899aabbccddeeff";
const SAMPLE_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// An interactive session. Ends on the exit choice or end of input.
pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input`.
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Runs the menu loop.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        loop {
            self.rule()?;
            writeln!(self.out, "Choose an action:")?;
            writeln!(self.out, "  [1] Encrypt")?;
            writeln!(self.out, "  [2] Decrypt")?;
            writeln!(self.out, "  [3] Exit")?;
            self.rule()?;
            let Some(choice) = self.ask("Choice [1/2/3]: ")? else {
                break;
            };
            let direction = match choice.as_str() {
                "1" => Direction::Encrypt,
                "2" => Direction::Decrypt,
                "3" => break,
                _ => {
                    writeln!(self.out, "Invalid choice, pick 1, 2 or 3.")?;
                    continue;
                }
            };
            self.operation(direction)?;
            if !self.confirm("Continue? (y/n): ")? {
                break;
            }
        }
        writeln!(self.out, "Goodbye.")?;
        self.out.flush()?;
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        self.rule()?;
        writeln!(self.out, "AES-256 interactive")?;
        self.rule()?;
        writeln!(
            self.out,
            "  Block: 16 bytes, key: 32 bytes, both entered as hex."
        )?;
        writeln!(self.out, "  Spaces and dashes in hex input are ignored.")?;
        Ok(())
    }

    fn operation(&mut self, direction: Direction) -> Result<()> {
        let (data_label, verb) = match direction {
            Direction::Encrypt => ("plaintext", "encryption"),
            Direction::Decrypt => ("ciphertext", "decryption"),
        };
        writeln!(self.out, "Mode:")?;
        writeln!(self.out, "  [1] Raw block (16 bytes, no padding)")?;
        writeln!(self.out, "  [2] PKCS#7 padded ECB")?;
        let mode = match self.ask("Mode [1/2]: ")?.as_deref() {
            Some("1") => Mode::RawBlock,
            _ => Mode::Padded,
        };

        let data_len = (mode == Mode::RawBlock).then_some(BLOCK_SIZE);
        let Some(data) = self.hex_input(data_label, data_len)? else {
            writeln!(self.out, "Cancelled {verb}.")?;
            return Ok(());
        };
        let Some(key) = self.hex_input("key", Some(KEY_SIZE))? else {
            writeln!(self.out, "Cancelled {verb}.")?;
            return Ok(());
        };

        let output = match apply(direction, mode, &data, &key) {
            Ok(output) => output,
            Err(err) => {
                writeln!(self.out, "Error: {err:#}")?;
                return Ok(());
            }
        };

        let report = Report {
            direction,
            input: &data,
            key: &key,
            output: &output,
        };
        self.show(&report)?;

        if self.confirm("Save result to a file? (y/n): ")? {
            let name = self.ask(&format!("File name (default {DEFAULT_REPORT}): "))?;
            let path = match name.as_deref() {
                None | Some("") => PathBuf::from(DEFAULT_REPORT),
                Some(name) => PathBuf::from(name),
            };
            match report.save(&path) {
                Ok(()) => writeln!(self.out, "Saved to {}", path.display())?,
                Err(err) => writeln!(self.out, "Error: {err:#}")?,
            }
        }
        Ok(())
    }

    fn show(&mut self, report: &Report<'_>) -> Result<()> {
        let (input_label, output_label) = match report.direction {
            Direction::Encrypt => ("Plaintext", "Ciphertext"),
            Direction::Decrypt => ("Ciphertext", "Plaintext"),
        };
        self.rule()?;
        self.grouped(input_label, report.input)?;
        self.grouped("Key", report.key)?;
        self.grouped(output_label, report.output)?;
        if report.direction == Direction::Decrypt {
            if let Some(text) = printable_text(report.output) {
                writeln!(self.out, "As text: {text}")?;
            }
        }
        self.rule()
    }

    fn grouped(&mut self, label: &str, bytes: &[u8]) -> Result<()> {
        writeln!(self.out, "{label} ({} bytes):", bytes.len())?;
        for line in format_grouped(bytes, BLOCK_SIZE) {
            writeln!(self.out, "    {line}")?;
        }
        Ok(())
    }

    /// Prompts for hex until it parses, or the user declines to retry.
    fn hex_input(&mut self, label: &str, exact: Option<usize>) -> Result<Option<Vec<u8>>> {
        loop {
            match exact {
                Some(len) => {
                    let sample = if len == KEY_SIZE {
                        SAMPLE_KEY
                    } else {
                        SAMPLE_BLOCK
                    };
                    writeln!(
                        self.out,
                        "Enter {label}: {len} bytes ({} hex chars)",
                        len * 2
                    )?;
                    writeln!(self.out, "  e.g. {sample}")?;
                }
                None => writeln!(self.out, "Enter {label} as hex (any length)")?,
            }
            let Some(line) = self.ask("> ")? else {
                return Ok(None);
            };
            let parsed = match exact {
                Some(len) => parse_hex_exact(&line, len),
                None => parse_hex(&line),
            };
            match parsed {
                Ok(bytes) => return Ok(Some(bytes)),
                Err(err) => {
                    writeln!(self.out, "Error: {err:#}")?;
                    if !self.confirm("Try again? (y/n): ")? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    /// Returns the trimmed answer, or `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }
}
