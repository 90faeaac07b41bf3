#![forbid(unsafe_code)]

//! stepsort demo binary entry point.
//!
//! An example host for the engine: generates a dataset, runs the chosen
//! algorithm, and paints bars plus a pseudocode highlight panel to the
//! terminal as the run narrates itself.

mod cli;
mod render;

use std::sync::Arc;
use std::time::Duration;

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor::MoveTo, execute};
use tracing_subscriber::EnvFilter;

use stepsort_runtime::{Engine, EngineConfig};

use crate::render::TerminalView;

fn main() {
    // Engine logging goes to stderr; the bar chart owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::Opts::parse();
    tracing::info!(
        algorithm = %opts.algorithm,
        size = opts.size,
        speed_ms = opts.speed_ms,
        "demo starting"
    );

    let mut config = EngineConfig::new()
        .with_speed(Duration::from_millis(opts.speed_ms))
        .with_size_bounds(2, 512);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    let view = Arc::new(TerminalView::new(opts.algorithm));
    let engine = Engine::with_observers(config, view.clone(), view);

    if execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).is_err() {
        eprintln!("stdout is not a usable terminal");
        std::process::exit(1);
    }

    engine.generate(opts.size);
    engine.start(opts.algorithm);
    while !engine.wait_until_settled(Duration::from_secs(60)) {}

    let stats = engine.stats();
    println!(
        "\n{} sorted {} values: {} comparisons, {} swaps, {} shifts",
        opts.algorithm,
        engine.sequence().len(),
        stats.comparisons,
        stats.swaps,
        stats.shifts
    );
}
