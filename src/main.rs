use recipe_api::config::Config;
use recipe_api::routes::{self, AppState};
use sea_orm::Database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "recipe_api=info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let db = Database::connect(&config.database_url).await?;

    let app = routes::router(AppState {
        db,
        budget: config.request_budget,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "recipe-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
