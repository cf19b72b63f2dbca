use anyhow::Context;
use intake_config::Config;
use intake_di::Provide;
use tracing::info;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    config.validate().context("Invalid config")?;

    let mut provider = Provider::new(&config)?;
    let server: RestServer = provider.provide();

    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
