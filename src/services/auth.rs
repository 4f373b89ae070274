use chrono::Local;
use serde::Serialize;

use crate::{
    auth::{
        Role,
        jwt::{ACCESS_TTL_SECS, JwtKeys, encode_token, make_access_claims},
        normalize_role,
        password::{MIN_PASSWORD_LEN, hash_password, verify_password},
    },
    config::AppConfig,
    db::dao::{AccountDao, EmployeeDao},
    error::AppError,
};

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub id: i64,
    pub token: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

fn validate_signup(username: &str, email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if username.trim().is_empty() {
        errors.push("username is required".to_string());
    }
    if email.trim().is_empty() {
        errors.push("email is required".to_string());
    } else if !email.contains('@') {
        errors.push("email must be a valid email address".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.push("password must be at least 8 characters".to_string());
    }
    errors
}

#[derive(Clone)]
pub struct AuthService {
    accounts: AccountDao,
    employees: EmployeeDao,
    jwt: JwtKeys,
}

impl AuthService {
    pub fn new(accounts: AccountDao, employees: EmployeeDao, jwt: JwtKeys) -> Self {
        Self {
            accounts,
            employees,
            jwt,
        }
    }

    /// Creates the account and, unless one already exists for the
    /// email, a bare ACTIVE employee profile named after the account.
    /// Signup-time profiles carry no department or designation; those
    /// defaults only apply when identity resolution provisions one.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<&'static str, AppError> {
        let errors = validate_signup(username, email, password);
        if !errors.is_empty() {
            return Err(AppError::validation(format!(
                "Validation failed: {}",
                errors.join("; ")
            )));
        }

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let hash = hash_password(password)?;
        let role = normalize_role(role);
        self.accounts
            .create_account(username, email, &hash, &role)
            .await?;

        if self.employees.find_by_email(email).await?.is_none() {
            self.employees
                .provision(username, email, Local::now().date_naive(), None, None)
                .await?;
        }

        Ok("User Registered successfully")
    }

    /// Same rejection for an unknown email and a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, AppError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid Credentials"))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AppError::unauthorized("Invalid Credentials"));
        }

        let role = Role::from_stored(&account.role).unwrap_or(Role::User);
        let claims = make_access_claims(&account.email, vec![role], ACCESS_TTL_SECS);
        let token = encode_token(&self.jwt, &claims)?;

        Ok(LoginData {
            id: account.id,
            token,
            email: account.email,
            username: account.username,
            role: account.role,
        })
    }

    /// Idempotent bootstrap account so a fresh deployment has one
    /// ADMIN login.
    pub async fn seed_admin(&self, cfg: &AppConfig) -> anyhow::Result<()> {
        if self
            .accounts
            .find_by_email(&cfg.admin_email)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash =
            hash_password(&cfg.admin_password).map_err(|err| anyhow::anyhow!(err.to_string()))?;
        self.accounts
            .create_account("admin", &cfg.admin_email, &hash, Role::Admin.stored())
            .await?;
        tracing::info!(email = %cfg.admin_email, "seeded admin account");
        Ok(())
    }
}
