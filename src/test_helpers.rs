use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    auth::{
        Role,
        jwt::{encode_token, make_access_claims},
    },
    config::AppConfig,
    db::entities::{account, employee},
    routes::app,
    state::AppState,
};

pub const TEST_JWT_SECRET: &str = "unit-test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        log_level: "warn".to_string(),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_min_idle: 1,
        admin_email: "admin@example.com".to_string(),
        admin_password: "adminpassword".to_string(),
        cors_allowed_origins: vec!["http://localhost:5173".to_string()],
    }
}

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    AppState::new(test_config(), db)
}

/// Full app over the given connection, usually a `MockDatabase` with
/// queued results.
pub fn test_app(db: DatabaseConnection) -> Router {
    app(test_state(db))
}

/// App over an empty mock connection, for routes that never reach the
/// database (guard rejections, unknown paths).
pub fn bare_test_app() -> Router {
    test_app(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

/// `Authorization` header value for a token signed with the test
/// secret.
pub fn bearer(email: &str, roles: Vec<Role>) -> String {
    let state = test_state(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let claims = make_access_claims(email, roles, 600);
    let token = encode_token(&state.jwt, &claims).expect("token should encode");
    format!("Bearer {token}")
}

/// Employee row with every optional column empty, for queuing into a
/// `MockDatabase`.
pub fn employee_fixture(id: i64, name: &str, email: &str) -> employee::Model {
    employee::Model {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        department: None,
        designation: None,
        salary: None,
        joining_date: None,
        status: Some("ACTIVE".to_string()),
        employee_code: None,
        employment_type: None,
        work_model: None,
        linkedin: None,
        twitter: None,
        instagram: None,
        transportation_allowance: None,
        meal_allowance: None,
        internet_allowance: None,
        health_insurance: None,
        life_insurance: None,
        training_program: None,
        fitness_membership: None,
        gender: None,
        dob: None,
        address: None,
        city: None,
        experience: None,
    }
}

pub fn account_fixture(id: i64, username: &str, email: &str, hash: &str, role: &str) -> account::Model {
    account::Model {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash.to_string(),
        role: role.to_string(),
    }
}
