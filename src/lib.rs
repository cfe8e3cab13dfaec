//! facebatch - batch face analysis client
//!
//! Submits every image listed in a manifest to a face-detection service,
//! flattens the per-face replies and writes them as a single CSV file.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{flatten, load_manifest, run, write_results, RunConfig, RunSummary};
pub use error::PipelineError;
pub use models::{DetectionResponse, OutputRow, ResultSet};
pub use services::{FaceApiClient, FaceApiError};
