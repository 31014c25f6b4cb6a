use std::path::PathBuf;

use thiserror::Error;

/// Raised while evaluating a single environment check. Captured per check and
/// never allowed to stop the remaining checks.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not inspect `{path}`: {source}")]
    Filesystem { path: PathBuf, source: std::io::Error },
    #[error("could not read running version `{value}`: {source}")]
    RuntimeVersion { value: String, source: semver::Error },
}
