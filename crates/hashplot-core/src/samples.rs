//! Sample collection and hash scheme identifiers

/// The three similarity-hash schemes evaluated against the same match data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Hyperplanes,
    Histogram,
    Projections,
}

impl HashScheme {
    /// Panel order: hyperplanes, histogram, projections.
    pub const ALL: [HashScheme; 3] = [
        HashScheme::Hyperplanes,
        HashScheme::Histogram,
        HashScheme::Projections,
    ];

    /// Label used in figure titles.
    pub fn label(self) -> &'static str {
        match self {
            HashScheme::Hyperplanes => "Hash Hyperplanes",
            HashScheme::Histogram => "Hash Histogram",
            HashScheme::Projections => "Hash Projections",
        }
    }
}

/// Parallel per-sample arrays: one match count plus one hash value per
/// scheme. All four arrays always hold the same number of entries.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    matches: Vec<f64>,
    hashes: [Vec<f64>; 3],
}

impl SampleSet {
    /// Number of samples collected so far.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Ground-truth descriptor match counts, in collection order.
    pub fn matches(&self) -> &[f64] {
        &self.matches
    }

    /// Hash values for one scheme, parallel to `matches()`.
    pub fn hashes(&self, scheme: HashScheme) -> &[f64] {
        &self.hashes[scheme as usize]
    }

    /// Append one sample row. Hash values arrive in `HashScheme::ALL` order.
    pub fn push(&mut self, match_count: f64, hash_values: [f64; 3]) {
        self.matches.push(match_count);
        for (column, value) in self.hashes.iter_mut().zip(hash_values) {
            column.push(value);
        }
    }
}
