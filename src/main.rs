use anyhow::Context;
use coinboard::client::CoinboardClient;
use coinboard::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    config.log_format.init();

    if config.api_key.is_none() {
        tracing::info!("COINGECKO_API_KEY not set, using the free rate-limited tier");
    }

    let client = CoinboardClient::from_config(&config).context("failed to build client")?;
    tracing::info!(upstream = %config.api_url, timeout_ms = config.request_timeout.as_millis() as u64, "Upstream configured");

    coinboard::server::serve(config.bind_addr, client)
        .await
        .with_context(|| format!("server on {} failed", config.bind_addr))
}
