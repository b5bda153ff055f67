use anyhow::Result;
use redditpains::config::Config;
use redditpains::logger::Logger;
use redditpains::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // `redditpains generate-config` writes the default config file and exits
    if std::env::args().nth(1).as_deref() == Some("generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install()?;

    ui::run_app(config, logger).await
}
