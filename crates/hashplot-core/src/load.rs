//! Directory loading: walk, parse, concatenate

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::layout::LayoutProfile;
use crate::options::LoadStats;
use crate::samples::{HashScheme, SampleSet};

/// A record that does not satisfy the layout profile.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("record {record}: {found} columns, layout needs column {needed}")]
    MissingColumn {
        record: u64,
        needed: usize,
        found: usize,
    },
    #[error("record {record}, column {column}: {value:?} is not a number")]
    BadNumber {
        record: u64,
        column: usize,
        value: String,
    },
}

/// Load every regular file beneath `dir` into one sample collection.
/// - Files are discovered recursively and parsed in path order, so repeated
///   runs concatenate identically.
/// - Each file is headerless delimited text; `#` starts a comment line.
/// - Malformed records fail the load with file context.
pub fn load_directory(dir: &Path, layout: &LayoutProfile) -> Result<(SampleSet, LoadStats)> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut samples = SampleSet::default();
    let mut stats = LoadStats::default();
    for path in files {
        load_file(&path, layout, &mut samples)
            .with_context(|| format!("parsing {}", path.display()))?;
        stats.files_loaded += 1;
    }
    stats.samples_loaded = samples.len();

    Ok((samples, stats))
}

/// Append one file's records to `samples`.
fn load_file(path: &Path, layout: &LayoutProfile, samples: &mut SampleSet) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(layout.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    for (n, record) in reader.records().enumerate() {
        let record = record?;
        let record_no = n as u64 + 1;
        let match_count = field_f64(&record, layout.match_column, record_no)?;
        let mut hash_values = [0.0; 3];
        for scheme in HashScheme::ALL {
            hash_values[scheme as usize] =
                field_f64(&record, layout.hash_column(scheme), record_no)?;
        }
        samples.push(match_count, hash_values);
    }

    Ok(())
}

fn field_f64(record: &csv::StringRecord, column: usize, record_no: u64) -> Result<f64, LoadError> {
    let raw = record.get(column).ok_or(LoadError::MissingColumn {
        record: record_no,
        needed: column,
        found: record.len(),
    })?;
    raw.parse::<f64>().map_err(|_| LoadError::BadNumber {
        record: record_no,
        column,
        value: raw.to_string(),
    })
}
