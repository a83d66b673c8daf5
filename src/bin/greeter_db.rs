use anyhow::Context;
use greeter::configuration::get_configuration;
use greeter::startup::{build, get_db_connection};
use greeter::telemetry::{get_subscriber, init_subscriber};

// Same server as the `greeter` binary, plus an in-memory database
// connection opened at startup. No route touches it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("greeter-db".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let _db_connection = get_db_connection(&configuration.database)
        .await
        .context("Failed to open the in-memory database.")?;
    let server = build(configuration)
        .await
        .context("Failed to bind the server address.")?;
    server.await?;
    Ok(())
}
