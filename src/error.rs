use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("resume not found at {0}")]
    ResumeMissing(PathBuf),

    #[error("failed to save resume to {path}")]
    SaveResume {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {target}")]
    Open {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;
