//! `typerr` CLI: encode, decode and clean records from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode a record (JSON) to its single-line form (stdin → stdout)
//! echo '{"code":"01","message":"general error"}' | typerr encode
//!
//! # Use the delimited compatibility format
//! typerr encode --format delimited -i record.json
//!
//! # Decode an encoded line back to pretty-printed JSON
//! echo 'error: code=01, message=general error' | typerr decode --pretty
//!
//! # Strip JSON quoting from text
//! echo '{"a":"b","c":["d"]}' | typerr clean
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=typerr=debug` for more detail.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typerr_core::{Record, WireFormat};

#[derive(Parser)]
#[command(
    name = "typerr",
    version,
    about = "Encode, decode and clean structured error records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON record to its single-line form
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Wire format: structured or delimited
        #[arg(short, long, default_value_t = WireFormat::Structured)]
        format: WireFormat,
    },
    /// Decode a single-line record back to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Strip structural JSON quoting from text
    Clean {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typerr=warn,typerr_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let record: Record =
                serde_json::from_str(&json).context("Failed to parse record JSON")?;
            tracing::debug!(%format, code = record.code(), "encoding record");
            let line = record.encode(format);
            write_output(output.as_deref(), &format!("{line}\n"))?;
        }
        Commands::Decode {
            input,
            output,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let line = raw.trim_end_matches(['\r', '\n']);
            let record = typerr_core::decode(line).context("Failed to decode record")?;
            let json = if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
        Commands::Clean { input, output } => {
            let text = read_input(input.as_deref())?;
            write_output(output.as_deref(), &typerr_core::clean(&text))?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
