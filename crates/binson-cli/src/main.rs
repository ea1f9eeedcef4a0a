//! `binson` CLI: encode, decode, and inspect Binson data from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to Binson (stdin → stdout, raw bytes)
//! echo '{"co":"u"}' | binson encode > msg.bin
//!
//! # Encode to hex text instead of raw bytes
//! echo '{"co":"u"}' | binson encode --hex
//!
//! # Decode Binson back to pretty-printed JSON
//! binson decode -i msg.bin
//! echo 401402636f14017541 | binson decode --hex
//!
//! # List every wire element with its offset
//! binson inspect -i msg.bin
//!
//! # Compare JSON and Binson sizes
//! binson stats -i data.json
//! ```
//!
//! Logging goes to stderr. `-v` enables debug output; `RUST_LOG` overrides it.

use anyhow::{Context, Result};
use binson_core::decoder::elements;
use binson_core::{json, DecodeOptions, Value, DEFAULT_MAX_DEPTH};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "binson", version, about = "Binson binary object notation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to Binson
    Encode {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Write lowercase hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },
    /// Decode Binson to pretty-printed JSON
    Decode {
        /// Input Binson file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Input is hex text rather than raw bytes
        #[arg(long)]
        hex: bool,
        /// Ignore bytes after the top-level value
        #[arg(long)]
        allow_trailing: bool,
        /// Maximum object/array nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// List wire elements with offsets and payloads
    Inspect {
        /// Input Binson file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Input is hex text rather than raw bytes
        #[arg(long)]
        hex: bool,
    },
    /// Show JSON vs. Binson size
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode { input, output, hex } => {
            let text = read_input_text(input.as_deref())?;
            let value = json::from_json_str(&text).context("Failed to convert JSON to Binson")?;
            let bytes = value.to_bytes();
            tracing::debug!(json_len = text.len(), binson_len = bytes.len(), "encoded");
            if hex {
                let mut line = binson_core::hex::to_hex(&bytes);
                line.push('\n');
                write_output(output.as_deref(), line.as_bytes())?;
            } else {
                write_output(output.as_deref(), &bytes)?;
            }
        }
        Commands::Decode {
            input,
            output,
            hex,
            allow_trailing,
            max_depth,
        } => {
            let bytes = read_binson(input.as_deref(), hex)?;
            let opts = DecodeOptions::default()
                .with_max_depth(max_depth)
                .allow_trailing(allow_trailing);
            let value = binson_core::decode_with(&bytes, &opts)
                .context("Failed to decode Binson")?;
            let mut pretty = json::to_json_string_pretty(&value)?;
            pretty.push('\n');
            write_output(output.as_deref(), pretty.as_bytes())?;
        }
        Commands::Inspect { input, hex } => {
            let bytes = read_binson(input.as_deref(), hex)?;
            let listing = inspect(&bytes).context("Failed to inspect Binson")?;
            write_output(None, listing.as_bytes())?;
        }
        Commands::Stats { input } => {
            let text = read_input_text(input.as_deref())?;
            let value = json::from_json_str(&text).context("Failed to convert JSON to Binson")?;
            let json_bytes = text.trim_end().len();
            let binson_bytes = binson_core::encoded_len(&value);
            let ratio = if json_bytes > 0 {
                binson_bytes as f64 / json_bytes as f64 * 100.0
            } else {
                0.0
            };
            println!("JSON size:    {} bytes", json_bytes);
            println!("Binson size:  {} bytes", binson_bytes);
            println!("Ratio:        {:.1}%", ratio);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One line per wire element: hex offset, indentation by depth, mark name,
/// and the payload for scalars.
fn inspect(bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    for elem in elements(bytes)? {
        let indent = "  ".repeat(elem.depth);
        let line = match &elem.scalar {
            Some(Value::Bool(_)) | None => format!("{:08x}  {}{}", elem.offset, indent, elem.mark),
            Some(value) => format!("{:08x}  {}{} {}", elem.offset, indent, elem.mark, value),
        };
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

fn read_binson(path: Option<&str>, hex: bool) -> Result<Vec<u8>> {
    if hex {
        let text = read_input_text(path)?;
        binson_core::hex::from_hex(&text).context("Failed to parse hex input")
    } else {
        read_input_bytes(path)
    }
}

fn read_input_text(path: Option<&str>) -> Result<String> {
    let bytes = read_input_bytes(path)?;
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

fn read_input_bytes(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
