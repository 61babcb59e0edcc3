use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use hashplot_core::{load_directory, load_layout_profile, render_report, LayoutProfile, RenderOptions};
use std::path::PathBuf;
use tracing::info;

/// Command-line entry point (clap based)
#[derive(Parser, Debug)]
#[command(name = "hashplot", version, about = "Plot hash matching batches against descriptor matches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the correspondence and success figures for a log directory
    Render {
        /// Directory where the user has saved several output files of the
        /// hash_matching node
        dir: PathBuf,

        /// How many images per bucket
        #[arg(short = 's', long = "size", default_value_t = 40)]
        size: usize,

        /// The matching threshold to consider an image a success
        #[arg(short = 't', long = "thresh", default_value_t = 300.0)]
        thresh: f64,

        /// Directory the rendered figures are written to
        #[arg(long, default_value = "./plots")]
        out: PathBuf,

        /// Record layout profile (TOML); defaults to the hash_matching layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Log level via RUST_LOG, e.g. RUST_LOG=debug
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { dir, size, thresh, out, layout } => {
            ensure!(size >= 1, "bucket size must be at least 1");
            info!(?dir, bucket_size = size, thresh, "rendering report");

            let layout = match layout {
                Some(path) => load_layout_profile(&path).context("load layout profile")?,
                None => LayoutProfile::default(),
            };

            let (samples, stats) = load_directory(&dir, &layout).context("load samples")?;
            ensure!(!samples.is_empty(), "no samples found under {}", dir.display());

            let opts = RenderOptions {
                bucket_size: size,
                thresh,
                out_dir: out,
                ..RenderOptions::default()
            };
            let report = render_report(&samples, &opts).context("render figures")?;

            info!(
                files_loaded = stats.files_loaded,
                samples_loaded = stats.samples_loaded,
                buckets_per_scheme = report.buckets_per_scheme,
                "report finished"
            );
            info!(
                correspondences = %report.correspondences.display(),
                success = %report.success.display(),
                "figures written"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
