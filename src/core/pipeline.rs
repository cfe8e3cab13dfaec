use crate::core::{flatten::flatten, manifest::load_manifest, writer::write_results};
use crate::error::PipelineError;
use crate::models::{OutputRow, ResultSet};
use crate::services::face_api::{FaceApiClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use futures::{stream, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Immutable parameters of one batch run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub service_url: String,
    pub timeout: Duration,
    /// Maximum number of requests in flight; 1 means strictly sequential
    pub concurrency: usize,
}

impl RunConfig {
    /// Config with the default endpoint, timeout and sequential dispatch
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            service_url: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: 1,
        }
    }
}

/// Counts reported at the end of a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub images: usize,
    pub faces: usize,
    pub images_without_faces: usize,
}

/// Run the whole batch: load, detect, flatten, write.
///
/// # Pipeline Stages
/// 1. Manifest and output path checks (before any network traffic)
/// 2. Manifest load with all-or-nothing path validation
/// 3. Detection and flattening per image, results kept in manifest order
/// 4. Single write of the result set
///
/// The first failure aborts the run and no output file is produced.
pub async fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    let started = Instant::now();

    if !config.input.exists() {
        return Err(PipelineError::ManifestNotFound(config.input.clone()));
    }
    if config.output.exists() {
        return Err(PipelineError::OutputExists(config.output.clone()));
    }

    let images = load_manifest(&config.input)?;

    tracing::info!(
        "Processing {} image(s) against {} (concurrency: {})",
        images.len(),
        config.service_url,
        config.concurrency
    );

    let client = FaceApiClient::new(config.service_url.clone(), config.timeout)
        .map_err(PipelineError::ClientInit)?;

    // `buffered` yields in input order regardless of completion order
    let per_image: Vec<Vec<OutputRow>> = stream::iter(images.iter())
        .map(|image| process_image(&client, image))
        .buffered(config.concurrency.max(1))
        .try_collect()
        .await?;

    let summary = RunSummary {
        images: images.len(),
        faces: per_image.iter().map(Vec::len).sum(),
        images_without_faces: per_image.iter().filter(|rows| rows.is_empty()).count(),
    };

    let results: ResultSet = per_image.into_iter().flatten().collect();
    write_results(&config.output, &results)?;

    tracing::info!(
        "Wrote {} face row(s) from {} image(s) to {} in {:.2?} ({} image(s) without faces)",
        summary.faces,
        summary.images,
        config.output.display(),
        started.elapsed(),
        summary.images_without_faces
    );

    Ok(summary)
}

async fn process_image(client: &FaceApiClient, image: &Path) -> Result<Vec<OutputRow>, PipelineError> {
    let response = client
        .detect(image)
        .await
        .map_err(|source| PipelineError::Service {
            image: image.to_path_buf(),
            source,
        })?;

    let rows = flatten(image, &response)?;
    if rows.is_empty() {
        tracing::warn!("No faces detected in {}", image.display());
    }

    Ok(rows)
}
