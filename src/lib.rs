pub mod assets;
pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod links;
pub mod logging;
pub mod models;
pub mod resume;

pub use assets::{AssetAudit, Assets};
pub use config::{Cli, Config};
pub use error::PortfolioError;
pub use models::{Contact, GalleryItem, Profile, Project};

#[cfg(feature = "gui")]
pub mod gui;
