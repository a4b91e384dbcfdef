use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared state injected into every handler via `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
