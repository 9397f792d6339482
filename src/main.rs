use std::sync::Arc;

use shop_auth_service::app_state::AppState;
use shop_auth_service::services::{SqlSessionStore, SqlUserStore};
use shop_auth_service::utils::Config;
use shop_auth_service::{get_db_pool, Application};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::default().expect("Failed to load config"));

    let pool = get_db_pool(config.database_url())
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let user_store = Arc::new(SqlUserStore::new(pool.clone()));
    let session_store = Arc::new(SqlSessionStore::new(pool));
    let app_state = AppState::new(config.clone(), user_store, session_store);

    let app = Application::build(app_state, config.app_addr())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
