//! Categorical decision-tree induction CLI.
//!
//! Loads a categorical CSV (last column is the class label), grows a
//! depth-bounded tree, and writes the trace to stdout or a file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use arbor::data::io::{load_csv, LoadOptions};
use arbor::training::TreeGrower;
use arbor::trees::{render, trace};

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Grow a categorical decision tree and print its trace", long_about = None)]
struct Args {
    /// Input CSV dataset path (categorical columns, last column is the class label)
    input: PathBuf,

    /// Write the trace to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for modal-label tie resolution
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Discard the first input row (header line)
    #[arg(long)]
    skip_header: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let options = LoadOptions {
        skip_header: args.skip_header,
    };
    let table = load_csv(&args.input, options)
        .with_context(|| format!("Failed to load dataset from {}", args.input.display()))?;
    info!(
        "loaded {} rows with {} attributes",
        table.n_rows(),
        table.n_attrs()
    );

    let grower = TreeGrower::builder().seed(args.seed).build()?;
    let tree = grower.grow(&table);
    let records = trace(&tree, &table);
    let text = render(&records);

    match &args.output {
        Some(path) => {
            fs::write(path, text + "\n")
                .with_context(|| format!("Failed to write trace to {}", path.display()))?;
            info!("trace written to {}", path.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}
