//! Render options and load statistics

use std::path::PathBuf;

/// Parameters for one report rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Samples per bucket for the success-percentage aggregation.
    pub bucket_size: usize,
    /// Descriptor match count at or above which a sample counts as a success.
    pub thresh: f64,
    /// Directory the rendered figures are written to.
    pub out_dir: PathBuf,
    /// Pixel size of each figure (three panels side by side).
    pub figure_size: (u32, u32),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bucket_size: 40,
            thresh: 300.0,
            out_dir: PathBuf::from("./plots"),
            figure_size: (1600, 600),
        }
    }
}

/// Load statistics (for CLI reporting).
#[derive(Debug, Default, Clone)]
pub struct LoadStats {
    pub files_loaded: usize,
    pub samples_loaded: usize,
}
