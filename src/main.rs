use chat_relay::{build_router, build_state, RelayConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RelayConfig::from_env();

    info!(
        bind_addr = %config.bind_addr,
        track_presence = config.track_presence,
        event_capacity = config.event_capacity,
        "Starting chat relay"
    );

    let (app_state, _dispatch_handle) = build_state(&config);
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.unwrap();
}
