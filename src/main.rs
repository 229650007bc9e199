//! barcut - CLI tool to plan cuts of profile bars.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use barcut_rs::{
    generate_cut_layout, generate_cut_report, parse_piece_file, validate_requests, CutOptimizer,
    OptimizerConfig, PackingStrategy,
};

/// Output produced by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text cutting report
    Report,
    /// Visual layout as JSON
    Layout,
    /// Full cutting plan as JSON
    Plan,
}

/// Plan the cuts of profile bars with minimal waste.
#[derive(Parser, Debug)]
#[command(name = "barcut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input piece list (.json, or text with one "label;length;quantity" per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stock bar length in mm (overrides the input file)
    #[arg(short, long)]
    stock_length: Option<f64>,

    /// Kerf per cut in mm (overrides the input file)
    #[arg(short, long)]
    kerf: Option<f64>,

    /// Packing strategy: first-fit or best-fit
    #[arg(long, default_value = "first-fit")]
    strategy: PackingStrategy,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    format: OutputFormat,

    /// Validate only, don't optimize
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let list = parse_piece_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Loaded {} request(s)", list.pieces.len());

    // Command-line values win over values from the file
    let mut config = OptimizerConfig::default();
    list.apply_to(&mut config);
    if let Some(stock_length) = args.stock_length {
        config.stock_length = stock_length;
    }
    if let Some(kerf) = args.kerf {
        config.kerf = kerf;
    }
    config.strategy = args.strategy;

    // Validate
    let validation = validate_requests(&list.pieces, &config)?;
    validation.log();

    if !validation.passed() {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let optimizer = CutOptimizer::with_config(config);
    let plan = optimizer.try_optimize(&list.pieces)?;

    let output = match args.format {
        OutputFormat::Report => generate_cut_report(&plan),
        OutputFormat::Layout => serde_json::to_string_pretty(&generate_cut_layout(&plan))?,
        OutputFormat::Plan => serde_json::to_string_pretty(&plan)?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}
