use std::ffi::OsStr;

use log::{debug, warn};

use crate::error::{PortfolioError, Result};

/// Hands a URL or file path to the system opener without waiting for it.
pub fn open_external(target: impl AsRef<OsStr>) -> Result<()> {
    let target = target.as_ref();
    debug!("opening {}", target.to_string_lossy());
    open::that_detached(target).map_err(|source| PortfolioError::Open {
        target: target.to_string_lossy().into_owned(),
        source,
    })
}

/// Like [`open_external`], logging failures instead of returning them.
pub fn open_or_log(target: impl AsRef<OsStr>) {
    if let Err(e) = open_external(target) {
        warn!("{:#}", anyhow::Error::from(e));
    }
}
