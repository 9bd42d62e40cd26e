use clap::Parser;

use portfolio::{Cli, Config, logging::init_logging};

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    init_logging(config.logging.clone());

    let audit = config.assets.audit();
    if !audit.is_complete() {
        log::warn!(
            "some assets are missing under {}; pages will render without them",
            config.assets.root().display()
        );
    }

    portfolio::gui::run(config)?;
    Ok(())
}
