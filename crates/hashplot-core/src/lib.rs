//! Batch analysis of hash_matching output directories.
//!
//! The pipeline is a single sequential pass:
//! - walk the input directory and concatenate every file's records into
//!   parallel per-sample arrays (match count + three hash schemes);
//! - sort each scheme's pairing by hash value and aggregate fixed-size
//!   buckets into success percentages;
//! - render the correspondence scatter and the success bars as two
//!   three-panel figures.

mod bucket;
mod layout;
mod load;
mod options;
mod plot;
mod samples;

pub use bucket::match_percentage_by_bucket;
pub use layout::{load_layout_profile, LayoutProfile};
pub use load::{load_directory, LoadError};
pub use options::{LoadStats, RenderOptions};
pub use plot::{render_report, RenderedReport};
pub use samples::{HashScheme, SampleSet};
