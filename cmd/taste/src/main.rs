//! taste - virtual tasting demo pipeline.
//!
//! Scans a spectrum file (or takes a composition directly), classifies the
//! composition against a small labeled dataset, and prints the predicted
//! flavor and texture.

mod render;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use virtaste_flavor::{rows_from_yaml, Config, FileSource, FlavorModel, TrainingSource};
use virtaste_spectrum::{estimate_composition, scan_file, ScanConfig, Spectrum};

/// Predict flavor and texture from a chemical composition.
#[derive(Parser, Debug)]
#[command(name = "taste")]
#[command(about = "Predict flavor and texture from a chemical composition")]
#[command(version)]
struct Args {
    /// Training dataset file, YAML or JSON (default: embedded sample set)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Spectrum file to scan, YAML or JSON (default: embedded sample spectrum)
    #[arg(short, long)]
    spectrum: Option<PathBuf>,

    /// Inline composition JSON, e.g. '{"water":0.6,"sugar":0.2}'; skips scanning
    #[arg(short, long)]
    composition: Option<String>,

    /// Print the prediction as JSON (for piping)
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

const SAMPLE_ROWS: &str = include_str!("../data/sample_rows.yaml");
const SAMPLE_SPECTRUM: &str = include_str!("../data/sample_spectrum.yaml");

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    let rows = match &args.data {
        Some(path) => FileSource::new(path)
            .rows()
            .with_context(|| format!("load training data from {}", path.display()))?,
        None => rows_from_yaml(SAMPLE_ROWS).context("parse embedded sample rows")?,
    };
    tracing::debug!(rows = rows.len(), "training data loaded");

    let model = FlavorModel::build(Config::default(), &rows).context("build flavor model")?;
    tracing::debug!(
        labels = model.centroids().len(),
        features = ?model.features(),
        "model built"
    );

    let composition: HashMap<String, f64> = match (&args.composition, &args.spectrum) {
        (Some(json), _) => {
            serde_json::from_str(json).context("parse --composition JSON")?
        }
        (None, Some(path)) => scan_file(path, &ScanConfig::default())?,
        (None, None) => {
            let spectrum =
                Spectrum::from_yaml(SAMPLE_SPECTRUM).context("parse embedded sample spectrum")?;
            estimate_composition(&spectrum, &ScanConfig::default())
        }
    };
    tracing::debug!(?composition, "composition ready");

    let label = model.predict(&composition);

    if args.json {
        println!("{}", serde_json::to_string(&label)?);
    } else {
        println!("{}", render::render_card(&label));
    }

    Ok(())
}
