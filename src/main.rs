mod commands;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting weekly hours editor");

    // Load configuration
    let config = startup::load_config()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    startup::run(config, args).await
}
