//! worldview-plot CLI - Ternary plot rendering tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Ternary plot rendering and calibration tool.
#[derive(Parser)]
#[command(name = "worldview-plot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a score triple to an SVG plot
    Render {
        /// PreModern score
        #[arg(long)]
        pre: f64,

        /// Modern score
        #[arg(long = "mod")]
        modern: f64,

        /// PostModern score
        #[arg(long)]
        post: f64,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 700.0)]
        height: f64,

        /// Uniform margin in pixels
        #[arg(long, default_value_t = 50.0)]
        margin: f64,

        /// Hide the interior grid lines
        #[arg(long)]
        no_grid: bool,

        /// Hide the corner shading
        #[arg(long)]
        no_shading: bool,

        /// Hide the category boundary triangle
        #[arg(long)]
        no_boundaries: bool,

        /// Hide the baseline triangle and ticks
        #[arg(long)]
        no_baseline: bool,
    },

    /// Classify scores and write a plot report
    Report {
        /// PreModern score (single-triple mode)
        #[arg(long)]
        pre: Option<f64>,

        /// Modern score (single-triple mode)
        #[arg(long = "mod")]
        modern: Option<f64>,

        /// PostModern score (single-triple mode)
        #[arg(long)]
        post: Option<f64>,

        /// Batch input CSV with pre,mod,post columns
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (JSON for a single triple, CSV for a batch)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Adjust label placements interactively (debug builds of the plot)
    Calibrate {
        /// Label to adjust (premodern, modern, postmodern)
        #[arg(long, default_value = "postmodern")]
        label: String,

        /// Adjustment steps, e.g. "x:5" "y:-5" "r:15"
        steps: Vec<String>,

        /// Enable the calibration overlay capability
        #[arg(long)]
        debug: bool,

        /// Write the calibrated scene to this SVG file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            pre,
            modern,
            post,
            output,
            width,
            height,
            margin,
            no_grid,
            no_shading,
            no_boundaries,
            no_baseline,
        } => commands::render::run(
            pre,
            modern,
            post,
            &output,
            width,
            height,
            margin,
            no_grid,
            no_shading,
            no_boundaries,
            no_baseline,
            cli.verbose,
        ),
        Commands::Report {
            pre,
            modern,
            post,
            input,
            output,
        } => commands::report::run(pre, modern, post, input, output, cli.verbose),
        Commands::Calibrate {
            label,
            steps,
            debug,
            output,
        } => commands::calibrate::run(&label, &steps, debug, output, cli.verbose),
    }
}
