//! zoomgrid demo host
//!
//! Builds a grid of labelled tiles with a full-width footer, zooms into one
//! tile, shows all again, and reports every tile's geometry after each
//! phase. Frames are driven headlessly at the target frame rate.

mod demo;

use anyhow::{bail, Context, Result};
use clap::Parser;
use demo::PhaseReport;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use zoomgrid_core::Rect;
use zoomgrid_layout::config::{MAX_DURATION_MS, MIN_DURATION_MS};
use zoomgrid_layout::{AnimatedGridLayout, GridConfig};

/// Drive an animated grid through a zoom cycle
#[derive(Parser, Debug)]
#[command(name = "zoomgrid")]
#[command(about = "Drive an animated grid through a zoom-in and show-all cycle")]
#[command(version)]
struct Args {
    /// Rows of regular tiles (a footer row is added below)
    #[arg(long, default_value = "3")]
    rows: usize,

    /// Columns of regular tiles
    #[arg(long, default_value = "4")]
    cols: usize,

    /// Layout width
    #[arg(long, default_value = "800")]
    width: f32,

    /// Layout height
    #[arg(long, default_value = "600")]
    height: f32,

    /// Animation duration in milliseconds, overrides the config file
    #[arg(short, long)]
    duration: Option<u32>,

    /// Target frame rate
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Grid config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Index of the tile to zoom into
    #[arg(short, long, default_value = "6")]
    zoom: usize,

    /// Sleep between frames instead of stepping a fixed delta
    #[arg(long)]
    realtime: bool,

    /// Print phase reports as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if args.rows == 0 || args.cols == 0 {
        bail!("--rows and --cols must be at least 1");
    }

    let mut config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GridConfig::default(),
    };
    if let Some(duration) = args.duration {
        config.duration_ms = duration.clamp(MIN_DURATION_MS, MAX_DURATION_MS);
    }

    let mut grid = AnimatedGridLayout::with_config(&config).context("Invalid grid config")?;
    grid.set_target_fps(args.fps);
    let tiles = demo::populate(&mut grid, args.rows, args.cols)
        .context("Failed to populate demo grid")?;

    let Some(target) = tiles.get(args.zoom).cloned() else {
        bail!("--zoom {} is out of range (0..{})", args.zoom, tiles.len());
    };

    grid.on_animation_finished(|event| {
        tracing::info!(
            transition = ?event.transition,
            focused = ?event.focused,
            "transition finished"
        );
    });

    grid.set_geometry(Rect::new(0.0, 0.0, args.width, args.height));
    tracing::info!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        duration_ms = grid.animation_duration(),
        "grid ready"
    );

    let mut reports = vec![PhaseReport::capture("grid", 0, &tiles)];

    if !grid.zoom_to(&target) {
        bail!("zoom request was rejected");
    }
    let frames = run_frames(&mut grid, args.realtime)?;
    reports.push(PhaseReport::capture("zoomed", frames, &tiles));

    if !grid.show_all() {
        bail!("show-all request was rejected");
    }
    let frames = run_frames(&mut grid, args.realtime)?;
    reports.push(PhaseReport::capture("restored", frames, &tiles));

    if args.json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to encode report")?;
        println!("{out}");
    } else {
        log_reports(&reports);
    }
    Ok(())
}

/// Tick until the running group finishes, returning the frame count
fn run_frames(grid: &mut AnimatedGridLayout, realtime: bool) -> Result<usize> {
    let interval = grid.frame_interval();
    let dt_ms = interval.as_secs_f32() * 1000.0;
    let limit = frame_limit(grid.animation_duration(), interval);

    for frame in 1..=limit {
        let finished = if realtime {
            std::thread::sleep(interval);
            grid.tick()
        } else {
            grid.tick_by(dt_ms)
        };
        if finished.is_some() {
            return Ok(frame);
        }
    }
    bail!("animation did not finish within {limit} frames")
}

/// Generous frame budget for one group
fn frame_limit(duration_ms: u32, interval: Duration) -> usize {
    let interval_ms = interval.as_secs_f64() * 1000.0;
    (duration_ms as f64 / interval_ms).ceil() as usize * 2 + 2
}

fn log_reports(reports: &[PhaseReport]) {
    for report in reports {
        tracing::info!(phase = %report.phase, frames = report.frames, "phase complete");
        for rect in &report.tiles {
            tracing::info!(
                "  {:<10} x={:>7.1} y={:>7.1} w={:>6.1} h={:>6.1}{}",
                rect.label,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                if rect.visible { "" } else { " (hidden)" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoomgrid_layout::VisualElement;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["zoomgrid"]);
        assert_eq!(args.rows, 3);
        assert_eq!(args.cols, 4);
        assert_eq!(args.zoom, 6);
        assert!(args.duration.is_none());
    }

    #[test]
    fn test_frame_limit_covers_duration() {
        assert_eq!(frame_limit(250, Duration::from_millis(20)), 13 * 2 + 2);
    }

    #[test]
    fn test_run_frames_completes_cycle() {
        let mut grid = AnimatedGridLayout::new();
        let tiles = demo::populate(&mut grid, 3, 4).unwrap();
        grid.set_geometry(Rect::new(0.0, 0.0, 800.0, 600.0));

        assert!(grid.zoom_to(&tiles[6]));
        let frames = run_frames(&mut grid, false).unwrap();
        assert!(frames >= 15);
        assert!(grid.is_zoomed());
        assert_eq!(tiles[6].borrow().geometry(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }
}
