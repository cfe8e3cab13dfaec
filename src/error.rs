use crate::services::FaceApiError;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a batch run. The first one raised aborts the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input file does not exist: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    ManifestRead(#[source] std::io::Error),

    #[error("File path not valid: {}", .0.display())]
    InvalidImagePath(PathBuf),

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Failed to initialise face service client: {0}")]
    ClientInit(#[source] FaceApiError),

    #[error("Face service failed for {}: {source}", image.display())]
    Service {
        image: PathBuf,
        #[source]
        source: FaceApiError,
    },

    #[error("Malformed face #{index} in response for {}: missing {field}", image.display())]
    MalformedFace {
        image: PathBuf,
        index: usize,
        field: &'static str,
    },

    #[error("Failed to write results: {0}")]
    WriteError(String),
}

impl PipelineError {
    /// HTTP status of a rejected service call, if that is what failed
    pub fn service_status(&self) -> Option<u16> {
        match self {
            PipelineError::Service {
                source: FaceApiError::ServiceError(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::WriteError(err.to_string())
    }
}
