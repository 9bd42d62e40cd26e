use std::path::PathBuf;

use clap::Parser;

use crate::assets::Assets;
use crate::core::Page;
use crate::logging::LoggingConfig;

#[derive(Debug, Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio: projects, playground gallery, about and resume")]
pub struct Cli {
    /// Directory holding the images and the resume PDF
    #[arg(long, env = "PORTFOLIO_ASSETS", value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,

    /// Page shown on launch
    #[arg(long, value_enum, default_value_t = Page::Landing)]
    pub page: Page,

    /// Initial window width
    #[arg(long, value_name = "PX", default_value_t = 1100.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, value_name = "PX", default_value_t = 800.0)]
    pub height: f32,

    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings the application boots with
#[derive(Debug, Clone)]
pub struct Config {
    pub assets: Assets,
    pub start_page: Page,
    pub window_width: f32,
    pub window_height: f32,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: Assets::new("assets"),
            start_page: Page::Landing,
            window_width: 1100.0,
            window_height: 800.0,
            logging: LoggingConfig::default(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            assets: Assets::new(cli.assets),
            start_page: cli.page,
            window_width: cli.width,
            window_height: cli.height,
            logging: LoggingConfig {
                env_filter: cli.log,
                verbose: cli.verbose,
                ..LoggingConfig::default()
            },
        }
    }
}
