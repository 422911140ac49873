use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::account::AccountRepository, error::AppError,
    service::admin::code::AdminCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the first request is served.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the existing Sqlite pool.
///
/// Sessions live in the same database as the application data; the store's
/// own migration creates its table. Sessions expire after seven days of
/// inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// Generates a one-time admin bootstrap code when no admin account exists.
///
/// The code is logged so the operator can complete the first login; it
/// expires after 60 seconds and is consumed on use.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_codes: &AdminCodeService,
    config: &Config,
) -> Result<(), AppError> {
    let account_repo = AccountRepository::new(db);

    if account_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_codes.generate().await;

    tracing::warn!(
        "No admin account exists. Log in once at {}/api/auth/login with a username of your choice and one-time code {} (valid for 60 seconds)",
        config.app_url,
        code
    );

    Ok(())
}
