use crate::error::PipelineError;
use crate::models::{OutputRow, OUTPUT_HEADER};
use std::io::ErrorKind;
use std::path::Path;

/// Write all rows to a new CSV file at `output_path`.
///
/// Refuses to replace an existing file. Rows are written to a temporary file
/// next to the target and moved into place only once complete, so a failed
/// write never leaves a partial results file behind.
pub fn write_results(output_path: &Path, rows: &[OutputRow]) -> Result<(), PipelineError> {
    if output_path.exists() {
        return Err(PipelineError::OutputExists(output_path.to_path_buf()));
    }

    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let temp = tempfile::Builder::new()
        .prefix(".facebatch-")
        .suffix(".csv.tmp")
        .tempfile_in(dir)
        .map_err(|e| PipelineError::WriteError(format!("cannot create file in {}: {}", dir.display(), e)))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp.as_file());

        // Written explicitly so an empty result set still gets a header
        writer.write_record(OUTPUT_HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer
            .flush()
            .map_err(|e| PipelineError::WriteError(e.to_string()))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| PipelineError::WriteError(e.to_string()))?;

    temp.persist_noclobber(output_path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            PipelineError::OutputExists(output_path.to_path_buf())
        } else {
            PipelineError::WriteError(e.error.to_string())
        }
    })?;

    tracing::debug!("Wrote {} row(s) to {}", rows.len(), output_path.display());

    Ok(())
}

/// Read a results file back into rows
pub fn read_results(path: &Path) -> Result<Vec<OutputRow>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader.deserialize().collect()
}
