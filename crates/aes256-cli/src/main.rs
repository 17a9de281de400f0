//! Command-line interface for the reference AES-256 cipher.

#![forbid(unsafe_code)]

mod hexio;
mod interactive;
mod ops;
mod report;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use aes256_core::{decrypt, encrypt, encrypt_block, BLOCK_SIZE, KEY_SIZE};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::hexio::{format_grouped, parse_hex, parse_hex_exact, printable_text};
use crate::interactive::Session;
use crate::ops::{apply, Mode};
use crate::report::{Direction, Report};

/// AES-256 CLI.
#[derive(Parser)]
#[command(
    name = "aes256",
    version,
    author,
    about = "Reference AES-256 (FIPS-197) CLI"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by `enc` and `dec`.
#[derive(Args)]
struct HexArgs {
    /// AES-256 key as 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Input data as hex.
    #[arg(long, value_name = "HEX")]
    data_hex: String,
    /// Process exactly one 16-byte block without padding.
    #[arg(long, default_value_t = false)]
    raw: bool,
    /// Write a result report to this file.
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
}

/// Arguments shared by `enc-file` and `dec-file`.
#[derive(Args)]
struct FileArgs {
    /// AES-256 key as 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt hex data (PKCS#7 padded ECB unless --raw).
    Enc(HexArgs),
    /// Decrypt hex data (strips PKCS#7 padding unless --raw).
    Dec(HexArgs),
    /// Encrypt a whole file with padded ECB.
    EncFile(FileArgs),
    /// Decrypt a whole file with padded ECB.
    DecFile(FileArgs),
    /// Check the FIPS-197 vector and run a random round trip.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Menu-driven session on stdin/stdout.
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc(args) => cmd_hex(Direction::Encrypt, &args),
        Commands::Dec(args) => cmd_hex(Direction::Decrypt, &args),
        Commands::EncFile(args) => cmd_file(Direction::Encrypt, &args),
        Commands::DecFile(args) => cmd_file(Direction::Decrypt, &args),
        Commands::Demo { seed } => cmd_demo(seed),
        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), io::stdout().lock()).run()
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default);
    env_logger::Builder::from_env(env).init();
}

fn cmd_hex(direction: Direction, args: &HexArgs) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let mode = if args.raw {
        Mode::RawBlock
    } else {
        Mode::Padded
    };
    let data = match mode {
        Mode::RawBlock => parse_hex_exact(&args.data_hex, BLOCK_SIZE),
        Mode::Padded => parse_hex(&args.data_hex),
    }
    .context("decode data hex")?;

    let output = apply(direction, mode, &data, &key)?;
    let report = Report {
        direction,
        input: &data,
        key: &key,
        output: &output,
    };
    print_report(&report);
    if let Some(path) = &args.save {
        report.save(path)?;
    }
    Ok(())
}

fn print_report(report: &Report<'_>) {
    let (input_label, output_label) = match report.direction {
        Direction::Encrypt => ("plaintext", "ciphertext"),
        Direction::Decrypt => ("ciphertext", "plaintext"),
    };
    for (label, bytes) in [
        (input_label, report.input),
        ("key", report.key),
        (output_label, report.output),
    ] {
        println!("{label} ({} bytes):", bytes.len());
        for line in format_grouped(bytes, BLOCK_SIZE) {
            println!("    {line}");
        }
    }
    if report.direction == Direction::Decrypt {
        if let Some(text) = printable_text(report.output) {
            println!("text: {text}");
        }
    }
}

fn cmd_file(direction: Direction, args: &FileArgs) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let data = read(&args.input)?;
    let output = match direction {
        Direction::Encrypt => encrypt(&data, &key)?,
        Direction::Decrypt => decrypt(&data, &key).context("decrypt input")?,
    };
    fs::write(&args.output, &output)
        .with_context(|| format!("write {}", args.output.display()))?;
    log::info!("{direction:?}: {} -> {} bytes", data.len(), output.len());
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")?;
    let plaintext = hex::decode("00112233445566778899aabbccddeeff")?;
    let ciphertext = encrypt_block(&plaintext, &key)?;
    println!("fips-197 c.3 ciphertext: {}", hex::encode(ciphertext));
    if hex::encode(ciphertext) != "8ea2b7ca516745bfeafc49904b496089" {
        bail!("known-answer vector mismatch");
    }

    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key_bytes);
    let mut message = vec![0u8; 1 + (rng.next_u32() % 64) as usize];
    rng.fill_bytes(&mut message);

    let ciphertext = encrypt(&message, &key_bytes)?;
    let decrypted = decrypt(&ciphertext, &key_bytes)?;
    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    parse_hex_exact(hex_str, KEY_SIZE).context("AES-256 key must be 32 bytes (64 hex characters)")
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aes256-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_encrypt_then_decrypt_restores_input() {
        let plain = scratch("plain.bin");
        let sealed = scratch("sealed.bin");
        let opened = scratch("opened.bin");
        let data: Vec<u8> = (0..100u8).collect();
        fs::write(&plain, &data).expect("write input");

        let enc = FileArgs {
            key_hex: KEY_HEX.to_string(),
            input: plain.clone(),
            output: sealed.clone(),
        };
        cmd_file(Direction::Encrypt, &enc).expect("enc-file");
        let ciphertext = fs::read(&sealed).expect("read ciphertext");
        assert_eq!(ciphertext.len(), 112);
        assert_ne!(&ciphertext[..100], data.as_slice());

        let dec = FileArgs {
            key_hex: KEY_HEX.to_string(),
            input: sealed.clone(),
            output: opened.clone(),
        };
        cmd_file(Direction::Decrypt, &dec).expect("dec-file");
        assert_eq!(fs::read(&opened).expect("read plaintext"), data);

        for path in [plain, sealed, opened] {
            fs::remove_file(path).expect("cleanup");
        }
    }

    #[test]
    fn dec_file_rejects_unaligned_input() {
        let input = scratch("unaligned.bin");
        let output = scratch("unaligned.out");
        fs::write(&input, [0u8; 20]).expect("write input");
        let args = FileArgs {
            key_hex: KEY_HEX.to_string(),
            input: input.clone(),
            output: output.clone(),
        };
        assert!(cmd_file(Direction::Decrypt, &args).is_err());
        assert!(!output.exists());
        fs::remove_file(input).expect("cleanup");
    }

    #[test]
    fn missing_input_file_is_reported() {
        let args = FileArgs {
            key_hex: KEY_HEX.to_string(),
            input: scratch("does-not-exist.bin"),
            output: scratch("never-written.bin"),
        };
        let err = cmd_file(Direction::Encrypt, &args).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.bin"));
    }

    #[test]
    fn raw_encrypt_saves_report() {
        let path = scratch("report.txt");
        let args = HexArgs {
            key_hex: KEY_HEX.to_string(),
            data_hex: "00112233445566778899aabbccddeeff".to_string(),
            raw: true,
            save: Some(path.clone()),
        };
        cmd_hex(Direction::Encrypt, &args).expect("enc");
        let text = fs::read_to_string(&path).expect("read report");
        fs::remove_file(&path).expect("cleanup");
        assert!(text.contains("8ea2b7ca516745bfeafc49904b496089"));
    }

    #[test]
    fn short_key_is_rejected() {
        assert!(parse_key_hex("0011").is_err());
        assert_eq!(parse_key_hex(KEY_HEX).expect("key").len(), KEY_SIZE);
    }

    #[test]
    fn seeded_demo_succeeds() {
        cmd_demo(Some(7)).expect("demo");
        cmd_demo(Some(7)).expect("demo is repeatable");
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
