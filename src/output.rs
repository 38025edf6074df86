//! Persist emitted artifacts beneath an output root.
//!
//! Each artifact lands at `<out_root>/<package segments>/<TypeName>.rs`;
//! default-package artifacts sit directly under the root. Directories are
//! created on demand. Generated files are build outputs only; a later round
//! never reads them back.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::artifact::GeneratedArtifact;

/// The emission backend failed to persist one artifact.
///
/// Recoverable per-artifact: the round reports it against the target type and
/// keeps emitting the rest.
#[derive(Debug, Error)]
#[error("unable to write fielder for type '{source_type}' to {path}: {cause}")]
pub struct WriteError {
    pub source_type: String,
    pub path: PathBuf,
    #[source]
    pub cause: std::io::Error,
}

/// Path an artifact will be written to, relative decisions included.
pub fn artifact_path(out_root: &Path, artifact: &GeneratedArtifact) -> PathBuf {
    let mut path = out_root.to_path_buf();
    if !artifact.target_package().is_empty() {
        for segment in artifact.target_package().split('.') {
            path.push(segment);
        }
    }
    path.push(format!("{}.rs", artifact.generated_type_name()));
    path
}

/// Write one emitted artifact to disk, creating package directories as needed.
#[tracing::instrument(skip_all, fields(ty = artifact.generated_type_name()))]
pub fn write_artifact(out_root: &Path, artifact: &GeneratedArtifact, code: &str) -> Result<PathBuf, WriteError> {
    let path = artifact_path(out_root, artifact);

    let io_error = |cause| WriteError {
        source_type: artifact.source_type().to_string(),
        path: path.clone(),
        cause,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&path, code).map_err(io_error)?;

    tracing::debug!(path = %path.display(), "wrote generated fielder");
    Ok(path)
}
