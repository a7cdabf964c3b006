//! SVG render command.

use std::path::Path;

use anyhow::{Context, Result};
use worldview_plot::{
    render_svg, Calibrator, CanvasConfig, Layer, LayerVisibility, PlotScene, RecordingSink,
    ScoreTriple,
};

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn run(
    pre: f64,
    modern: f64,
    post: f64,
    output: &Path,
    width: f64,
    height: f64,
    margin: f64,
    no_grid: bool,
    no_shading: bool,
    no_boundaries: bool,
    no_baseline: bool,
    verbose: bool,
) -> Result<()> {
    let scores = ScoreTriple::new(pre, modern, post);
    let canvas = CanvasConfig::builder()
        .width(width)
        .height(height)
        .margin(margin)
        .build();

    let mut layers = LayerVisibility::all_visible();
    layers.set_visible(Layer::GridLines, !no_grid);
    layers.set_visible(Layer::Shading, !no_shading);
    layers.set_visible(Layer::CategoryBoundaries, !no_boundaries);
    layers.set_visible(Layer::Baseline, !no_baseline);

    let mut scene = PlotScene::new(false);
    let mut sink = RecordingSink::new();
    let description = scene
        .render(Some(&scores), &canvas, &layers, &Calibrator::new(), &mut sink)
        .context("Failed to compute plot scene")?;

    if verbose {
        if let Some(point) = description.plot_point {
            eprintln!("Plot point: ({:.2}, {:.2})", point.x, point.y);
        }
        for advisory in sink.advisories() {
            eprintln!("Advisory: {advisory}");
        }
    }

    let svg = render_svg(&description);
    std::fs::write(output, svg)
        .with_context(|| format!("Failed to write to {}", output.display()))?;

    println!("Saved to: {}", output.display());
    Ok(())
}
