use std::path::Path;

use log::info;

use crate::error::{PortfolioError, Result};

/// File name suggested in the save dialog.
pub fn suggested_file_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string())
}

/// Copies the resume PDF to `destination`, returning the number of bytes
/// written.
pub async fn save_resume(source: &Path, destination: &Path) -> Result<u64> {
    let is_file = tokio::fs::metadata(source)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(PortfolioError::ResumeMissing(source.to_path_buf()));
    }

    let bytes = tokio::fs::copy(source, destination)
        .await
        .map_err(|source| PortfolioError::SaveResume {
            path: destination.to_path_buf(),
            source,
        })?;

    info!("saved resume to {} ({bytes} bytes)", destination.display());
    Ok(bytes)
}
