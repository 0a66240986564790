use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::BufRead;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rv_disasm::Xlen;
use rv_disasm_cli::{load_raw_bin, parse_u32, render_text, sweep, words_to_records};

#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V disassembler CLI", long_about = None)]
struct Cli {
    /// Integer register width: 32, 64 or 128
    #[arg(long, global = true, default_value_t = Xlen::Rv64)]
    xlen: Xlen,
    /// Output format: text or json
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    out: Option<String>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassemble instruction words (read from stdin, one per line, if none are given)
    Words {
        /// Words in hex (`0x` optional, `_` allowed)
        #[arg(value_name = "WORD", allow_hyphen_values = true)]
        words: Vec<String>,
        /// Parse words as decimal instead of hex
        #[arg(long)]
        dec: bool,
    },
    /// Disassemble a range [start, end) of a raw little-endian image
    Range {
        /// Input binary path
        #[arg(value_name = "BINFILE")]
        input: String,
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Load address for the binary in target address space
        #[arg(long, default_value = "0", value_parser = parse_u32)]
        base: u32,
        /// Skip N bytes at start of file before loading
        #[arg(long, default_value_t = 0usize)]
        skip: usize,
        /// Limit bytes loaded (default: to EOF after --skip)
        #[arg(long)]
        len: Option<usize>,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let records = match cli.cmd {
        Command::Words { words, dec } => {
            let radix = if dec { 10 } else { 16 };
            if words.is_empty() {
                let lines = std::io::stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?;
                words_to_records(cli.xlen, &lines, radix)
            } else {
                words_to_records(cli.xlen, &words, radix)
            }
        }
        Command::Range { input, start, end, base, skip, len, show_bytes } => {
            let img = load_raw_bin(Path::new(&input), base, skip, len)?;
            info!(path = %input, base, "loaded image");
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            sweep(&img, start, end, cli.xlen, show_bytes)
        }
    };

    let text = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)? + "\n",
        OutputFormat::Text => render_text(&records),
    };
    if let Some(path) = cli.out {
        std::fs::write(&path, text)?;
        info!(path = %path, records = records.len(), "wrote output");
    } else {
        print!("{text}");
    }

    Ok(())
}
