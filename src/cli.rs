//! Command-line argument definitions for facebatch.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;
use crate::core::RunConfig;

/// Analyze face images: submit every image listed in the input file to the
/// face service and write one CSV row per detected face.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Name of the input file. A text file where each row should contain a path to an input image.
    #[arg(value_name = "INPUTFILE")]
    pub input: PathBuf,

    /// Name of the output file. Must not exist yet.
    #[arg(value_name = "OUTPUTFILE")]
    pub output: PathBuf,

    /// Optional settings file (TOML, YAML or JSON). Defaults to `config/local.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the face service endpoint.
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Override the per-request timeout in seconds.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Maximum number of requests in flight (results keep manifest order).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..=64))]
    pub concurrency: Option<u64>,
}

impl Cli {
    /// Merge command-line overrides over loaded settings into the run parameters
    pub fn into_run_config(self, settings: &Settings) -> RunConfig {
        let service = &settings.service;
        RunConfig {
            input: self.input,
            output: self.output,
            service_url: self.service_url.unwrap_or_else(|| service.url.clone()),
            timeout: self
                .timeout_secs
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| service.timeout()),
            concurrency: self
                .concurrency
                .map(|n| n as usize)
                .unwrap_or(service.concurrency),
        }
    }
}
