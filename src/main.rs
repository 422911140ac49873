mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, router, service::admin::code::AdminCodeService, startup, state::AppState,
    upload::LocalFileStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffboard=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    let admin_codes = AdminCodeService::new();
    startup::check_for_admin(&db, &admin_codes, &config).await?;

    let file_store = Arc::new(LocalFileStore::new(&config.upload_dir));

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = router::router()
        .with_state(AppState::new(db, file_store, admin_codes))
        .layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
