use actix_web::http::Method;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};
use super::session::AdminSession;

const LOGIN_FAILED: &str = "Login failed";

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Reply of `POST /api/admin/login`. Older deployments send `uid` instead of `userId`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "uid")]
    pub user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Turn the reply into a session, or the rejection message.
    pub fn into_session(self) -> Result<AdminSession, ApiError> {
        let rejected = |message: Option<String>| {
            ApiError::Rejected(
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED.to_string()),
            )
        };
        if !self.success {
            return Err(rejected(self.message));
        }
        let token = match self.token.filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => return Err(rejected(self.message)),
        };
        let user_id = match self.user_id {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Ok(AdminSession {
            user_id,
            email: self.email.unwrap_or_default(),
            token,
        })
    }
}

/// Authenticate against the results API.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AdminSession, ApiError> {
    let res: LoginResponse = api
        .call("/api/admin/login", Method::POST, Some(&Credentials { email, password }), None)
        .await?;
    let admin = res.into_session()?;
    log::info!("Admin {} logged in", admin.email);
    Ok(admin)
}
