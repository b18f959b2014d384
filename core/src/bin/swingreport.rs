use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use swinggraph_core::analyzer::parse_json;
use swinggraph_core::cli::print_swing_report;
use swinggraph_core::{
    load_config, AnalysisConfig, AnalysisMetrics, ClassificationResult, SwingAnalyzer, SwingCapture,
};

#[derive(Parser)]
#[command(author, version, about = "Build a swing quality report from a capture and a classification")]
struct Args {
    /// Swing capture (JSON)
    #[arg(long)]
    capture: PathBuf,
    /// Classification result from the plane classifier (JSON)
    #[arg(long)]
    classification: PathBuf,
    /// Analysis config (JSON); defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Dump prometheus metrics after the run
    #[arg(long, default_value_t = false)]
    metrics: bool,
}

fn read(path: &PathBuf) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    let capture: SwingCapture = parse_json("capture", &read(&args.capture)?)?;
    let classification: ClassificationResult =
        parse_json("classification", &read(&args.classification)?)?;

    let metrics = AnalysisMetrics::new().context("registering metrics")?;
    let analyzer = SwingAnalyzer::new(config)?.with_metrics(metrics.clone());
    let report = analyzer
        .analyze(&capture, Some(&classification))
        .with_context(|| format!("analyzing {}", args.capture.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_swing_report(&report);
    }
    if args.metrics {
        print!("{}", metrics.render());
    }
    Ok(())
}
