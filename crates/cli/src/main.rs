//! CLI tool that generates the MCP Context Forge presentation.

mod deck;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{DeckOutline, Presentation};
use deck_pptx::{PptxReader, PptxWriter};
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "docs/presentation/MCP-Context-Forge-Presentation.pptx";

/// Generate the MCP Context Forge slide deck as a PPTX file.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Re-open the written file and check it against the generated deck
    #[arg(long)]
    verify: bool,

    /// Write the outline read back from the file as JSON to this path
    #[arg(long, value_name = "PATH")]
    outline: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let pres = deck::build_deck();
    generate(&pres, &args.output)?;
    println!("Presentation saved to: {}", args.output.display());

    if args.verify || args.outline.is_some() {
        let outline = read_back(&pres, &args.output, args.verify)?;
        if let Some(ref path) = args.outline {
            write_outline(&outline, path)?;
            println!("Outline saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Write `pres` to `path`, creating missing parent directories.
fn generate(pres: &Presentation, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    log::debug!("Writing {} slides to {}", pres.len(), path.display());
    PptxWriter::new()
        .save(pres, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Write `outline` as pretty-printed JSON.
fn write_outline(outline: &DeckOutline, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(outline).context("Failed to serialize outline")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read the written file back, optionally checking it against `pres`.
fn read_back(pres: &Presentation, path: &Path, verify: bool) -> Result<DeckOutline> {
    let reader = PptxReader::new();
    let outline = if verify {
        reader
            .verify(pres, path)
            .with_context(|| format!("Verification of {} failed", path.display()))?
    } else {
        reader
            .open(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    if verify {
        eprintln!("Verified {} slides", outline.slides.len());
    }
    Ok(outline)
}
