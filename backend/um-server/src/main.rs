use um_server::error::{Result as ServerErrorResult, ServerError};
use um_server::{AppState, build_router, logger};

use um_db::UserRepository;

use http::HeaderValue;
use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; UM_* variables may also come from the shell
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = um_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting um-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and apply migrations
    let database_path = config.database_path()?;
    let pool = um_db::connect(&database_path).await?;
    let state = AppState::new(UserRepository::new(pool.clone()));

    let allowed_origin =
        HeaderValue::from_str(&config.cors.allowed_origin).map_err(|e| ServerError::CorsOrigin {
            origin: config.cors.allowed_origin.clone(),
            message: e.to_string(),
        })?;

    // Build router
    let app = build_router(state, allowed_origin);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
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
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will run until killed");
            std::future::pending::<()>().await;
        }
    }
}
