use garage_server::{Config, Server, ServerState, print_banner, setup_environment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. Load .env and config
    let _ = dotenv::dotenv();
    let config = Config::from_env()?;

    // 2. Logging
    setup_environment(&config);
    print_banner();

    tracing::info!(
        environment = %config.environment,
        backend = ?config.counter_backend,
        "Garage server starting..."
    );

    // 3. Open the counter store
    let state = ServerState::initialize(&config).await.inspect_err(|e| {
        tracing::error!("Failed to initialize server state: {}", e);
    })?;

    // 4. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
