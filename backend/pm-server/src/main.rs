use pm_server::{AppState, ServerResult, build_router, logger};

use std::process::ExitCode;

use log::{error, info};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet
            eprintln!("pm-server: {e}");
            error!("Server stopped: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerResult<()> {
    let dotenv = pm_config::Config::load_dotenv()?;

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Initialize database pool (migrations run on open)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = pm_db::open(
        &database_path,
        config.database.max_connections,
        config.database_busy_timeout(),
    )
    .await?;
    info!("Database ready");

    let app_state = AppState::from_config(pool.clone(), &config);

    let app = build_router(app_state).layer(ConcurrencyLimitLayer::new(
        config.server.max_connections,
    ));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
