use anyhow::{Context, Result};
use clap::Parser;
use jupiter_proto_client::{init_logging, run_demo, Cli, ClientConfig, JupiterClient};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging().context("initializing logging")?;

    let cli = Cli::parse();
    let config = ClientConfig::setup(cli.client).context("loading configuration")?;
    let client = JupiterClient::new(config).context("building HTTP client")?;

    run_demo(&client).await;

    Ok(())
}
