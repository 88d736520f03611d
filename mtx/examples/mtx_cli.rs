//! Command line tool for inspecting and converting MatrixMarket files
//!
//! Set `RUST_LOG=mtx=debug` to see the parse stages.

use clap::{Parser, Subcommand};
use mtx::{DuplicatePolicy, MatrixAccess, MtxFile, ReaderConfig, WriterConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "MTX CLI - Inspect, query and convert MatrixMarket files")]
struct Cli {
    /// Keep the last of repeated coordinates instead of summing them
    #[arg(long, global = true)]
    overwrite_duplicates: bool,

    /// Fail when the entry count differs from the size line
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show matrix info
    Info {
        /// Path to a .mtx or .mtx.gz file
        file: PathBuf,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-encode a matrix, gzip compressed if the output ends in .gz
    Convert {
        input: PathBuf,
        output: PathBuf,

        /// Comment written after the banner
        #[arg(long)]
        comment: Option<String>,
    },
    /// Query a single element (0-based indices)
    Get {
        file: PathBuf,
        row: usize,
        col: usize,
    },
    /// Download a matrix of the public collection into the current directory
    #[cfg(feature = "http")]
    Fetch {
        collection: String,
        set: String,
        name: String,
    },
    /// List the matrices of the public collection
    #[cfg(feature = "http")]
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = if cli.overwrite_duplicates {
        DuplicatePolicy::Overwrite
    } else {
        DuplicatePolicy::Sum
    };
    let config = ReaderConfig::default()
        .with_duplicate_policy(policy)
        .with_strict_entry_count(cli.strict);

    let start_time = Instant::now();
    match cli.command {
        Commands::Info { file, json } => handle_info(&file, json, config)?,
        Commands::Convert {
            input,
            output,
            comment,
        } => handle_convert(&input, &output, comment, config)?,
        Commands::Get { file, row, col } => handle_get(&file, row, col, config)?,
        #[cfg(feature = "http")]
        Commands::Fetch {
            collection,
            set,
            name,
        } => handle_fetch(mtx::CatalogEntry::new(collection, set, name))?,
        #[cfg(feature = "http")]
        Commands::List => handle_list()?,
    }

    let elapsed = start_time.elapsed();
    eprintln!("Completed in {elapsed:.2?}");
    Ok(())
}

fn handle_info(
    file: &Path,
    json: bool,
    config: ReaderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let market = MtxFile::read_with_config(file, config)?;

    if json {
        println!("{}", market.summary_json()?);
        return Ok(());
    }

    let (rows, cols) = market.dimensions();
    println!("{market}");
    println!("  File: {}", file.display());
    println!("  Declared entries: {}", market.declared_lines());
    println!("  Stored entries: {}", market.nnz());
    if rows > 0 && cols > 0 {
        println!(
            "  Density: {:.6}%",
            market.nnz() as f64 / (rows as f64 * cols as f64) * 100.0
        );
    }
    if !market.comment().is_empty() {
        println!("  Comment:");
        for line in market.comment().lines() {
            println!("    {line}");
        }
    }
    Ok(())
}

fn handle_convert(
    input: &Path,
    output: &Path,
    comment: Option<String>,
    config: ReaderConfig,
) -> mtx::Result<()> {
    let market = MtxFile::read_with_config(input, config)?;
    let writer_config = match comment {
        Some(comment) => WriterConfig::default().with_comment(comment),
        None => WriterConfig::default(),
    };
    MtxFile::write(output, market.matrix(), &writer_config)?;
    println!(
        "Wrote {} ({} stored entries) to {}",
        market.matrix().storage_format(),
        market.nnz(),
        output.display()
    );
    Ok(())
}

fn handle_get(file: &Path, row: usize, col: usize, config: ReaderConfig) -> mtx::Result<()> {
    let market = MtxFile::read_with_config(file, config)?;
    let (rows, cols) = market.dimensions();
    if row >= rows || col >= cols {
        eprintln!("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix");
        std::process::exit(2);
    }
    match market.get_element(row, col) {
        Some(value) => println!("Element at ({row}, {col}): {}", mtx::format_real(value)),
        None => println!("No element at ({row}, {col}), reads as 0"),
    }
    Ok(())
}

#[cfg(feature = "http")]
fn handle_fetch(entry: mtx::CatalogEntry) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let source = mtx::HttpSource::new();
    let path = runtime.block_on(source.download(&entry, std::path::Path::new(".")))?;
    let market = MtxFile::read(&path)?;
    println!("Downloaded {entry} to {}", path.display());
    println!("{market}");
    Ok(())
}

#[cfg(feature = "http")]
fn handle_list() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let entries = runtime.block_on(mtx::HttpSource::new().listing())?;
    for entry in &entries {
        println!("{entry}");
    }
    eprintln!("{} matrices", entries.len());
    Ok(())
}
