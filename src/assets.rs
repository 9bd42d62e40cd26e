use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::content;

/// Resolves catalog asset paths against the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    root: PathBuf,
}

/// Readable image with its pixel size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetAudit {
    pub images: Vec<ImageAsset>,
    /// Images that could not be opened or decoded
    pub missing: Vec<PathBuf>,
    pub resume_present: bool,
}

impl AssetAudit {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.resume_present
    }
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn resume(&self) -> PathBuf {
        self.resolve(content::RESUME)
    }

    /// Probes every image the catalog uses.
    pub fn audit(&self) -> AssetAudit {
        self.audit_images(content::image_refs())
    }

    /// Reads only image headers; nothing is decoded in full.
    pub fn audit_images<'a>(&self, refs: impl IntoIterator<Item = &'a str>) -> AssetAudit {
        let mut audit = AssetAudit::default();

        for relative in refs {
            let path = self.resolve(relative);
            match image::image_dimensions(&path) {
                Ok((width, height)) => {
                    debug!("asset {} is {width}x{height}", path.display());
                    audit.images.push(ImageAsset {
                        path,
                        width,
                        height,
                    });
                }
                Err(e) => {
                    warn!("unreadable image {}: {e}", path.display());
                    audit.missing.push(path);
                }
            }
        }

        let resume = self.resume();
        audit.resume_present = resume.is_file();
        if !audit.resume_present {
            warn!("resume not found at {}", resume.display());
        }

        info!(
            "assets in {}: {} images ok, {} missing",
            self.root.display(),
            audit.images.len(),
            audit.missing.len()
        );
        audit
    }
}
