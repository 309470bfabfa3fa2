use anyhow::Result;

use repscount::config::Config;
use repscount::logger;
use repscount::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init_file_logging(&config)?;

    ui::run_app(config).await?;

    Ok(())
}
