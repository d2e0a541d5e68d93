use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::{csrf, login};
use crate::auth::session::{client_id, get_admin, set_admin};
use crate::errors::{AppError, render};
use crate::inflight::{InFlight, IN_PROGRESS};
use crate::templates_structs::{ConfirmTemplate, LoginTemplate, PageContext};
use super::see_other;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, email: &str, error: Option<String>) -> Result<HttpResponse, AppError> {
    let csrf_token = csrf::get_or_create_token(session);
    render(LoginTemplate { error, email: email.to_string(), csrf_token })
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, go straight to the dashboard
    if get_admin(&session).is_some() {
        return Ok(see_other("/admin/results"));
    }
    login_form(&session, "", None)
}

pub async fn login_submit(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return login_form(&session, email, Some("Please fill all required fields".to_string()));
    }

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, "login") else {
        return login_form(&session, email, Some(IN_PROGRESS.to_string()));
    };

    match login::login(&api, email, &form.password).await {
        Ok(admin) => {
            set_admin(&session, &admin)?;
            Ok(see_other("/admin/results"))
        }
        Err(e) => {
            log::warn!("Login failed for {email}: {e}");
            login_form(&session, email, Some(format!("Login failed: {}", e.message())))
        }
    }
}

pub async fn logout_confirm(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "")?;
    render(ConfirmTemplate {
        ctx,
        title: "Logout".to_string(),
        message: "Are you sure you want to logout?".to_string(),
        confirm_action: "/admin/logout".to_string(),
        confirm_label: "Logout".to_string(),
        cancel_href: "/admin/results".to_string(),
    })
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    if let Some(admin) = get_admin(&session) {
        log::info!("Admin {} logged out", admin.email);
    }
    session.purge();
    Ok(see_other("/"))
}
