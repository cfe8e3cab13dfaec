use crate::error::PipelineError;
use std::path::{Path, PathBuf};

/// Load the image manifest and validate every listed path.
///
/// Validation is all-or-nothing: the first path that does not exist fails the
/// whole load. Order is preserved and duplicates are kept.
pub fn load_manifest(manifest_path: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    if !manifest_path.exists() {
        return Err(PipelineError::ManifestNotFound(manifest_path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(manifest_path).map_err(PipelineError::ManifestRead)?;
    let images = parse_manifest(&contents);

    // TODO: check the file is actually an image (magic bytes) before submitting it
    if let Some(missing) = images.iter().find(|image| !image.exists()) {
        return Err(PipelineError::InvalidImagePath(missing.clone()));
    }

    tracing::debug!("Loaded {} image path(s) from {}", images.len(), manifest_path.display());

    Ok(images)
}

/// Split manifest text into paths, one per non-empty line
pub fn parse_manifest(contents: &str) -> Vec<PathBuf> {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_empty_lines() {
        let images = parse_manifest("a.jpg\n\nb.jpg\n");
        assert_eq!(images, vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let images = parse_manifest("b.jpg\na.jpg\nb.jpg");
        assert_eq!(
            images,
            vec![PathBuf::from("b.jpg"), PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]
        );
    }

    #[test]
    fn test_parse_strips_crlf() {
        let images = parse_manifest("a.jpg\r\nb.jpg\r\n\r\n");
        assert_eq!(images, vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert!(parse_manifest("").is_empty());
        assert!(parse_manifest("\n\n").is_empty());
    }

    #[test]
    fn test_missing_manifest() {
        let err = load_manifest(Path::new("/definitely/not/here/manifest.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::ManifestNotFound(_)));
    }
}
