use crate::config::{RenderConfig, RenderMode};
use eyre::{Result, WrapErr, ensure};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Bin edges shared by the chart and `bin_counts`. The last bin is closed at
/// 100, the others are half-open.
const BIN_EDGES: [f64; 6] = [50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
const BIN_LABELS: [&str; 5] = ["50-59", "60-69", "70-79", "80-89", "90-100"];

/// Number of scores falling in each bin. Scores outside [50, 100] land in no
/// bin at all.
pub fn bin_counts(scores: &[f64]) -> [usize; 5] {
    let mut counts = [0; 5];
    for &score in scores {
        if !(BIN_EDGES[0]..=BIN_EDGES[5]).contains(&score) {
            continue;
        }
        let bin = if score == BIN_EDGES[5] {
            counts.len() - 1
        } else {
            ((score - BIN_EDGES[0]) / 10.0) as usize
        };
        counts[bin] += 1;
    }
    counts
}

/// Renders the score histogram for one assignment to
/// `{assignment_name}_histogram.png` and, in window mode, hands the image to
/// the platform viewer. Returns the written path.
pub fn render(assignment_name: &str, scores: &[f64], render: &RenderConfig) -> Result<PathBuf> {
    let counts = bin_counts(scores);
    debug!("bin counts for {assignment_name}: {counts:?}");
    let path = PathBuf::from(format!("{assignment_name}_histogram.png"));
    draw_chart(&path, assignment_name, &counts, render.size())
        .wrap_err_with(|| format!("cannot render histogram to {}", path.display()))?;
    info!("rendered histogram for {assignment_name} to {}", path.display());
    if render.mode == RenderMode::Window {
        open_viewer(&path)?;
    }
    Ok(path)
}

fn draw_chart(path: &Path, assignment_name: &str, counts: &[usize; 5], size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Histogram of Scores for {assignment_name}"),
            ("sans-serif", 22),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d((0..counts.len()).into_segmented(), 0..max_count + 1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Score Range")
        .y_desc("Number of Students")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(bin) => BIN_LABELS.get(*bin).copied().unwrap_or("").to_owned(),
            _ => String::new(),
        })
        .draw()?;
    chart.draw_series(counts.iter().enumerate().flat_map(|(bin, &count)| {
        let span = || {
            [
                (SegmentValue::Exact(bin), 0),
                (SegmentValue::Exact(bin + 1), count),
            ]
        };
        [
            Rectangle::new(span(), BLUE.mix(0.55).filled()),
            Rectangle::new(span(), BLACK.stroke_width(1)),
        ]
    }))?;
    root.present()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn open_viewer(path: &Path) -> Result<()> {
    wait_for_viewer(Command::new("open").arg("-W").arg(path))
}

#[cfg(target_os = "windows")]
fn open_viewer(path: &Path) -> Result<()> {
    wait_for_viewer(Command::new("cmd").args(["/C", "start", "/WAIT", ""]).arg(path))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_viewer(path: &Path) -> Result<()> {
    wait_for_viewer(Command::new("xdg-open").arg(path))
}

fn wait_for_viewer(command: &mut Command) -> Result<()> {
    let status = command.status().wrap_err("cannot launch image viewer")?;
    ensure!(status.success(), "image viewer exited with {status}");
    Ok(())
}
