use anyhow::Context;
use greeter::configuration::get_configuration;
use greeter::startup::build;
use greeter::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("greeter".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let server = build(configuration)
        .await
        .context("Failed to bind the server address.")?;
    server.await?;
    Ok(())
}
