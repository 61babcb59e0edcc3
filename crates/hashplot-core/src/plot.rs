//! Figure rendering (plotters)

use anyhow::{ensure, Context, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::bucket::match_percentage_by_bucket;
use crate::options::RenderOptions;
use crate::samples::{HashScheme, SampleSet};

/// Paths written by one report rendering.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub correspondences: PathBuf,
    pub success: PathBuf,
    /// Full buckets per scheme, `samples / bucket_size`.
    pub buckets_per_scheme: usize,
}

/// Render both figures for a loaded sample collection:
/// - `correspondences.png`: per scheme, ln(1 + hash) against the raw match
///   count, one panel per scheme with a shared y-axis.
/// - `success.png`: per scheme, the bucketed success percentages as bars in
///   sorted-sample-index space.
pub fn render_report(samples: &SampleSet, opts: &RenderOptions) -> Result<RenderedReport> {
    ensure!(!samples.is_empty(), "no samples to plot");

    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating {}", opts.out_dir.display()))?;
    let correspondences = opts.out_dir.join("correspondences.png");
    let success = opts.out_dir.join("success.png");

    draw_correspondences(samples, &correspondences, opts.figure_size)?;
    let buckets_per_scheme = draw_success(samples, &success, opts)?;

    Ok(RenderedReport {
        correspondences,
        success,
        buckets_per_scheme,
    })
}

/// Scatter panels of hash value vs. descriptor matches. The x-axis is
/// ln(1 + hash) to spread the low end of the hash range.
fn draw_correspondences(samples: &SampleSet, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let y_max = axis_max(samples.matches().iter());
    for (panel, scheme) in panels.iter().zip(HashScheme::ALL) {
        let points: Vec<(f64, f64)> = samples
            .hashes(scheme)
            .iter()
            .zip(samples.matches())
            .map(|(&h, &m)| ((1.0 + h).ln(), m))
            .collect();
        let x_max = axis_max(points.iter().map(|(x, _)| x));

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("{} Samples ({})", samples.len(), scheme.label()),
                ("sans-serif", 20),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Hash Matching");
        if scheme == HashScheme::Hyperplanes {
            mesh.y_desc("Descriptor Matches");
        }
        mesh.draw()?;

        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )?;
    }

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Bar panels of per-bucket success percentage. Bar `i` sits at
/// `(i + 0.5) * bucket_size` in sorted-sample-index space, 0.7 buckets wide.
fn draw_success(samples: &SampleSet, path: &Path, opts: &RenderOptions) -> Result<usize> {
    let root = BitMapBackend::new(path, opts.figure_size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let bucket = opts.bucket_size as f64;
    let half_width = 0.35 * bucket;
    let x_max = samples.len().max(1) as f64;
    let mut buckets_per_scheme = 0;

    for (panel, scheme) in panels.iter().zip(HashScheme::ALL) {
        let rates = match_percentage_by_bucket(
            samples.hashes(scheme),
            samples.matches(),
            opts.thresh,
            opts.bucket_size,
        );
        buckets_per_scheme = rates.len();

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("{} Samples ({})", samples.len(), scheme.label()),
                ("sans-serif", 20),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, 0f64..100f64)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Hash Matching");
        if scheme == HashScheme::Hyperplanes {
            mesh.y_desc("Success percentage (%)");
        }
        mesh.draw()?;

        chart.draw_series(rates.iter().enumerate().map(|(i, &rate)| {
            let center = (i as f64 + 0.5) * bucket;
            Rectangle::new(
                [(center - half_width, 0.0), (center + half_width, rate)],
                BLUE.filled(),
            )
        }))?;
    }

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(buckets_per_scheme)
}

/// Upper axis bound: the largest finite value padded by 5%, never zero.
fn axis_max<'a, I>(values: I) -> f64
where
    I: Iterator<Item = &'a f64>,
{
    let max = values
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    max.max(1e-6) * 1.05
}
