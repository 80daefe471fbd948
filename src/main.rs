use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use decgen_core::{emit, generate_str, GeneratorConfig};
use tracing_subscriber::prelude::*;

/// Generate an instruction decode table from a bit-pattern encoding file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Encoding definition file, one "<pattern> <mnemonic>" per line.
    input: PathBuf,
    /// Destination for the generated table fragment.
    output: PathBuf,
    /// Class or namespace the Execute* dispatch targets live in.
    namespace: String,
    /// Instruction width in bits.
    #[arg(long, default_value_t = 16)]
    width: u32,
    /// Reject wildcard characters outside x, X, ., ?.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let stderr_format = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry().with(stderr_format).init();

    let args = Args::parse();
    let config = GeneratorConfig {
        width: args.width,
        strict: args.strict,
    };

    tracing::info!("reading {}", args.input.display());
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let table = generate_str(&content, &args.namespace, &config)?;

    tracing::info!("writing {}", args.output.display());
    emit::write_atomic(&args.output, &table)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
