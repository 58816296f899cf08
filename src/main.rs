use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use quiz_backend::{
    config::{get_config, init_config},
    database::{
        pg_store::PgDocumentStore,
        pool::{create_pool, run_migrations},
    },
    routes,
    telemetry::{init_tracing, STARTUP_TARGET},
    utils::shutdown,
    AppState,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config);

    let shutdown_token = CancellationToken::new();
    shutdown::install_panic_hook(shutdown_token.clone());

    let pool = create_pool()
        .await
        .inspect_err(|e| error!(target: STARTUP_TARGET, "Database connection error: {}", e))?;
    info!(target: STARTUP_TARGET, "Successfully connected to database");

    run_migrations(&pool)
        .await
        .inspect_err(|e| error!(target: STARTUP_TARGET, "Database migration failed: {}", e))?;

    let app_state = AppState::new(Arc::new(PgDocumentStore::new(pool)));
    let app = routes::build_router(app_state, Path::new(&config.static_dir));

    let addr: SocketAddr = config.server_address.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(target: STARTUP_TARGET, "Server running on {}", addr);
    info!(target: STARTUP_TARGET, "API base URL: http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal(shutdown_token))
        .await?;

    if shutdown::fault_detected() {
        anyhow::bail!("server stopped after an unhandled fault");
    }
    info!(target: STARTUP_TARGET, "Server stopped");
    Ok(())
}
