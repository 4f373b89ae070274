pub mod jwt;
pub mod password;
pub mod role_layer;

use axum::{extract::FromRequestParts, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::User => "user",
        }
    }

    /// Stored namespace form, e.g. `ROLE_ADMIN`.
    pub fn stored(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Hr => "ROLE_HR",
            Role::User => "ROLE_USER",
        }
    }

    pub fn from_stored(value: &str) -> Option<Role> {
        match value {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_HR" => Some(Role::Hr),
            "ROLE_USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            "user" => Ok(Role::User),
            _ => Err(()),
        }
    }
}

/// Normalize a caller-supplied role label into the stored namespace
/// form: missing or empty input defaults to `ROLE_USER`, everything
/// else is trimmed, uppercased, and prefixed with `ROLE_` unless
/// already prefixed.
pub fn normalize_role(input: Option<&str>) -> String {
    match input {
        None | Some("") => "ROLE_USER".to_string(),
        Some(value) => {
            let upper = value.trim().to_uppercase();
            if upper.starts_with("ROLE_") {
                upper
            } else {
                format!("ROLE_{upper}")
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // account email
    pub exp: usize,  // expiry (unix)
    pub iat: usize,  // issued at
    pub roles: Vec<Role>,
}

impl Claims {
    pub fn has_any(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

// Helper extractor: pull JWT claims from request extensions.
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or((StatusCode::UNAUTHORIZED, "No claims in request"))
    }
}
