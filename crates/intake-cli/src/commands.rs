//! Run orchestration: load, normalize, summarize, render, export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use intake_ingest::{cases_from_value, load_cases_from_path, sample_batch};
use intake_report::{
    BatchSummary, export_csv, export_workbook, render_bill96_compliance,
    render_complexity_distribution, render_dashboard, render_nexus_analysis, summarize,
};
use intake_transform::build_table;

/// Directory where charts and exports land.
pub const OUTPUT_DIR: &str = "analytics_output";

/// Outcome of one analytics run.
pub struct RunResult {
    pub summary: BatchSummary,
    pub output_dir: PathBuf,
    pub generated: Vec<PathBuf>,
}

/// Runs the full analysis: with a path, a real export; without, the
/// embedded demonstration batch.
pub fn run(file: Option<&Path>) -> Result<RunResult> {
    let cases = match file {
        Some(path) => load_cases_from_path(path)
            .with_context(|| format!("load cases from {}", path.display()))?,
        None => {
            info!("no input file given, analyzing the embedded demonstration batch");
            cases_from_value(sample_batch()).context("decode demonstration batch")?
        }
    };
    let table = build_table(&cases)?;
    let summary = summarize(&table)?;

    let output_dir = PathBuf::from(OUTPUT_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut generated = Vec::new();
    let path = output_dir.join("complexity_distribution.png");
    render_complexity_distribution(&table, &path)?;
    generated.push(path);
    let path = output_dir.join("nexus_analysis.png");
    render_nexus_analysis(&table, &path)?;
    generated.push(path);
    let path = output_dir.join("bill96_compliance.png");
    render_bill96_compliance(&table, &path)?;
    generated.push(path);
    let path = output_dir.join("dashboard.html");
    render_dashboard(&table, &path)?;
    generated.push(path);
    let path = output_dir.join("tax_intake_summary.csv");
    export_csv(&table, &path)?;
    generated.push(path);
    let path = output_dir.join("tax_intake_summary.xlsx");
    export_workbook(&table, &path)?;
    generated.push(path);

    Ok(RunResult {
        summary,
        output_dir,
        generated,
    })
}
