use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::auth::csrf;
use crate::errors::AppError;

const ADMIN_KEY: &str = "admin";

/// Credentials of a logged-in administrator, as issued by the results API.
///
/// Created by a successful login and dropped by logout. It lives in the encrypted
/// session cookie only, which carries no max-age and ends with the browser session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

pub fn get_admin(session: &Session) -> Option<AdminSession> {
    session.get::<AdminSession>(ADMIN_KEY).unwrap_or(None)
}

/// The current admin, or `AppError::Unauthorized` (redirects to the login page).
pub fn require_admin(session: &Session) -> Result<AdminSession, AppError> {
    get_admin(session).ok_or(AppError::Unauthorized)
}

pub fn set_admin(session: &Session, admin: &AdminSession) -> Result<(), AppError> {
    session.renew();
    session
        .insert(ADMIN_KEY, admin)
        .map_err(|e| AppError::Session(format!("Failed to store admin session: {e}")))
}

pub fn set_flash(session: &Session, message: impl Into<String>) {
    let _ = session.insert("flash", message.into());
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Stable per-browser key for in-flight bookkeeping.
pub fn client_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>("client_id") {
        return id;
    }
    let id = csrf::generate_token();
    let _ = session.insert("client_id", &id);
    id
}
