//! Label calibration command.
//!
//! Applies a sequence of adjustment steps to one label and prints the
//! readout after each, optionally writing the calibrated scene as SVG so
//! the result can be inspected.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use worldview_plot::{
    render_svg, Axis, Calibrator, CanvasConfig, LayerVisibility, PlotScene, RecordingSink,
    ScoreTriple,
};

pub fn run(
    label: &str,
    steps: &[String],
    debug: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if !debug {
        bail!("Calibration requires --debug; production rendering has no overlay");
    }

    let mut calibrator = Calibrator::new();
    calibrator.select_label(label);

    for step in steps {
        let (axis, delta) = parse_step(step)?;
        calibrator.adjust(axis, delta);
        println!("{}", calibrator.readout());
    }
    if steps.is_empty() {
        println!("{}", calibrator.readout());
    }

    if let Some(path) = output {
        let mut scene = PlotScene::new(true);
        let mut sink = RecordingSink::new();
        // A centered sample point keeps the overlay visible in context.
        let description = scene
            .render(
                Some(&ScoreTriple::new(33.0, 34.0, 33.0)),
                &CanvasConfig::default(),
                &LayerVisibility::all_visible(),
                &calibrator,
                &mut sink,
            )
            .context("Failed to compute calibration scene")?;

        if verbose {
            for advisory in sink.advisories() {
                eprintln!("Advisory: {advisory}");
            }
        }

        std::fs::write(&path, render_svg(&description))
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        println!("Saved to: {}", path.display());
    }
    Ok(())
}

/// Parse a step like `x:5`, `y:-5` or `r:15`.
fn parse_step(step: &str) -> Result<(Axis, f64)> {
    let Some((axis_str, delta_str)) = step.split_once(':') else {
        bail!("Invalid step '{}': expected axis:delta, e.g. x:5", step);
    };
    let Some(axis) = Axis::from_str_loose(axis_str) else {
        bail!("Invalid axis '{}': expected x, y or r", axis_str);
    };
    let delta: f64 = delta_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid delta '{}'", delta_str))?;
    Ok((axis, delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        let (axis, delta) = parse_step("x:5").unwrap();
        assert_eq!(axis, Axis::X);
        assert!((delta - 5.0).abs() < 1e-12);

        let (axis, delta) = parse_step("r:-15").unwrap();
        assert_eq!(axis, Axis::R);
        assert!((delta + 15.0).abs() < 1e-12);

        assert!(parse_step("q:5").is_err());
        assert!(parse_step("x=5").is_err());
    }
}
