use maru_core::MaruConfig;
use maru_server::{app_with_state, state::AppState, sweep};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("maru=info,maru_server=info,tower_http=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("MARU_CONFIG").unwrap_or_else(|_| "maru.yaml".to_string());
    let config = MaruConfig::from_yaml_file(&config_path)?;
    let addr = config.bind_addr();

    let state = AppState::new(config)?;
    sweep::spawn(state.clone());
    let app = app_with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "maru server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
