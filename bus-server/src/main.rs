use bus_server::config::ServerConfig;
use bus_server::network::NetworkSnapshot;
use bus_server::planner::PlannerConfig;
use bus_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load the network snapshot (fail fast if unavailable)
    let network =
        NetworkSnapshot::load(&config.network_path).expect("Failed to load bus network");

    let state = AppState::new(network, PlannerConfig::default());
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Bus Trip Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                  - Health check");
    info!("  GET  /api/routes              - List routes");
    info!("  GET  /api/routes/:id          - Route details");
    info!("  GET  /api/routes/:id/stops    - Stops on a route");
    info!("  GET  /api/zones/:zone/routes  - Routes in a zone");
    info!("  POST /api/plan                - Plan a trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
