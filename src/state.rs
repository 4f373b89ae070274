use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::jwt::JwtKeys, config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub jwt: JwtKeys,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let jwt = JwtKeys::from_secret(config.jwt_secret.as_bytes());
        Arc::new(Self { config, jwt, db })
    }
}
