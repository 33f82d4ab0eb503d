//! Prints the metadata and the block resolutions of a KSH file.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example ksh_info -- path/to/chart.ksh
//! ```

use std::path::PathBuf;

use clap::Parser;
use ksh_rs::{
    diagnostics::emit_ksh_error,
    ksh::{KshError, UTF8_BOM, default_config, parse_ksh_bytes},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Prints the metadata and the block resolutions of a KSH file")]
struct Args {
    /// The path to the KSH file.
    path: PathBuf,
    /// Reads only the header section.
    #[arg(long)]
    metadata_only: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let bytes = match std::fs::read(&args.path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {}: {err}", args.path.display());
            std::process::exit(1);
        }
    };

    let config = default_config().metadata_only(args.metadata_only);
    let chart = match parse_ksh_bytes(&bytes, config) {
        Ok(chart) => chart,
        Err(KshError::Parse(err)) => {
            // The error positions are relative to the text after the byte order mark.
            let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes);
            let source = String::from_utf8_lossy(body);
            if emit_ksh_error(&args.path.display().to_string(), &source, &err).is_err() {
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut pairs: Vec<_> = chart.metadata().iter().collect();
    pairs.sort_unstable();
    for (key, value) in pairs {
        println!("{key}={value}");
    }
    println!();
    println!("blocks: {}", chart.block_count());
    println!("ticks: {}", chart.total_tick_count());
    for (index, block) in chart.blocks().iter().enumerate() {
        println!("  #{index:03}: {} ticks", block.tick_count());
    }
}
