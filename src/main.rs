use shelter::config::AppConfig;
use shelter::db::establish_pool;
use shelter::logging::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = establish_pool(&config).await?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Shelter API listening");

    axum::serve(listener, shelter::app(pool)).await?;

    Ok(())
}
