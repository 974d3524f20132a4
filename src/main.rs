mod model;
mod server;

use server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("Server failed to start: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db);

    let app = router::router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on {address}");

    axum::serve(listener, app).await?;

    Ok(())
}
