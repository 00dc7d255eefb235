use anonboard::configuration::get_config;
use anonboard::startup::Application;
use anonboard::telemetry::{get_subscriber, init_subscriber};
use anyhow::Context;

#[tokio::main]
async fn main() {
    if let Err(e) = try_main().await {
        eprintln!("Server startup error: {e:?}");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("anonboard".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_config().context("Failed to read configuration")?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
