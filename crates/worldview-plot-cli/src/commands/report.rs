//! Plot report command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use worldview_plot::{
    to_cartesian, write_csv_summary, CanvasConfig, PerspectiveSummary, PlotReport, ScoreTriple,
    TriangleVertices,
};

pub fn run(
    pre: Option<f64>,
    modern: Option<f64>,
    post: Option<f64>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    match (input, pre, modern, post) {
        (Some(path), None, None, None) => run_batch(&path, output, verbose),
        (None, Some(pre), Some(modern), Some(post)) => {
            run_single(pre, modern, post, output, verbose)
        }
        _ => bail!("Provide either --pre/--mod/--post or --input, not both"),
    }
}

fn run_single(
    pre: f64,
    modern: f64,
    post: f64,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = build_report(pre, modern, post)?;

    if verbose {
        eprintln!(
            "Point: ({:.2}, {:.2}), strength: {}",
            report.point.x, report.point.y, report.summary.strength
        );
    }

    if let Some(path) = output {
        println!("{}", report.perspective);
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        println!("Saved to: {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run_batch(input: &Path, output: Option<PathBuf>, verbose: bool) -> Result<()> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut reports = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let parse = |idx: usize| -> Result<f64> {
            record
                .get(idx)
                .with_context(|| format!("Row {}: missing column {}", line + 2, idx))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Row {}: invalid number", line + 2))
        };
        reports.push(build_report(parse(0)?, parse(1)?, parse(2)?)?);
    }

    if reports.is_empty() {
        bail!("No rows found in {}", input.display());
    }

    if verbose {
        eprintln!("Classified {} rows", reports.len());
    }

    for report in &reports {
        println!(
            "{:<45} ({:.2}, {:.2})",
            report.perspective, report.point.x, report.point.y
        );
    }

    if let Some(path) = output {
        write_csv_summary(&reports, &path)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        println!("Saved to: {}", path.display());
    }
    Ok(())
}

fn build_report(pre: f64, modern: f64, post: f64) -> Result<PlotReport> {
    let scores = ScoreTriple::new(pre, modern, post);
    let vertices = TriangleVertices::from_canvas(&CanvasConfig::default());
    let point = to_cartesian(&scores, &vertices)?;
    let summary = PerspectiveSummary::from_scores(&scores)?;
    Ok(PlotReport::new(scores, point, summary))
}
