//! Record layout profile loading (TOML)

use anyhow::{ensure, Result};
use serde::Deserialize;
use std::path::Path;

use crate::samples::HashScheme;

/// Raw layout file contents; every field is optional and falls back to the
/// hash_matching defaults.
#[derive(Debug, Clone, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    delimiter: Option<String>,
    #[serde(default)]
    match_column: Option<usize>,
    #[serde(default)]
    hyperplanes_column: Option<usize>,
    #[serde(default)]
    histogram_column: Option<usize>,
    #[serde(default)]
    projections_column: Option<usize>,
}

/// Normalized record layout: which delimited columns hold the match count
/// and the three hash values. Columns are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutProfile {
    pub delimiter: u8,
    pub match_column: usize,
    hash_columns: [usize; 3],
}

impl Default for LayoutProfile {
    /// The hash_matching node's output layout: comma-delimited, match count
    /// in column 2, hash values in columns 3, 4, 5.
    fn default() -> Self {
        Self {
            delimiter: b',',
            match_column: 2,
            hash_columns: [3, 4, 5],
        }
    }
}

impl LayoutProfile {
    /// Column holding the given scheme's hash value.
    pub fn hash_column(&self, scheme: HashScheme) -> usize {
        self.hash_columns[scheme as usize]
    }
}

/// Load a layout profile from a TOML file; unset fields keep their defaults.
pub fn load_layout_profile(path: &Path) -> Result<LayoutProfile> {
    let txt = std::fs::read_to_string(path)?;
    let parsed: LayoutFile = toml::from_str(&txt)?;
    let mut layout = LayoutProfile::default();

    if let Some(d) = parsed.delimiter {
        ensure!(d.len() == 1, "delimiter must be a single byte, got {:?}", d);
        layout.delimiter = d.as_bytes()[0];
    }
    if let Some(c) = parsed.match_column {
        layout.match_column = c;
    }
    if let Some(c) = parsed.hyperplanes_column {
        layout.hash_columns[HashScheme::Hyperplanes as usize] = c;
    }
    if let Some(c) = parsed.histogram_column {
        layout.hash_columns[HashScheme::Histogram as usize] = c;
    }
    if let Some(c) = parsed.projections_column {
        layout.hash_columns[HashScheme::Projections as usize] = c;
    }

    Ok(layout)
}
