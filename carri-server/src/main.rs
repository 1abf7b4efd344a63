use carri_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, logging)
    setup_environment();

    print_banner();

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "CarriAcces starting..."
    );

    // 3. Database, migrations and media directories
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
