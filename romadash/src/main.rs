use romadash::{AppConfig, Cli, impls::DashApp};
use roma_axum::{router, start_server};
use std::fs::File;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`; write the
    // events to stdio, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig { server, data } = AppConfig::load(&cli)?;

    tracing::info!(seed = data.seed, months = data.months, "synthetic market data");
    let app = DashApp::try_new(data)?;

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router(app, server);
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    start_server(server, app).await?;
    Ok(())
}
