use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, fmt};

use lounge_billing::modules::billing::core::policy::PricingPolicy;
use lounge_billing::shell::config::AppConfig;
use lounge_billing::shell::http::router;
use lounge_billing::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(PricingPolicy::default(), config.tax_rate);
    let app = router(state).layer(CorsLayer::permissive());

    tracing::info!(tax_rate = %config.tax_rate, "billing endpoint: http://{}/bills", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
