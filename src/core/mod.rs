// Core pipeline exports
pub mod flatten;
pub mod manifest;
pub mod pipeline;
pub mod writer;

pub use flatten::flatten;
pub use manifest::{load_manifest, parse_manifest};
pub use pipeline::{run, RunConfig, RunSummary};
pub use writer::{read_results, write_results};
