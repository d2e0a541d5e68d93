use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::auth::csrf;
use crate::auth::session::{client_id, require_admin, set_flash};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::see_other;
use crate::inflight::{InFlight, IN_PROGRESS};
use crate::models::board::{self, BoardForm, BoardListItem};
use crate::templates_structs::{BoardsPanelTemplate, PageContext};
use super::{confirm_delete_page, finish_delete, Kind};

/// Fetch the listing and render the panel; the add-board form keeps `name`/`logo_url`.
async fn panel(
    api: &ApiClient,
    session: &Session,
    name: String,
    logo_url: String,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, "boards")?;

    let (boards, load_error) = match board::find_all(api).await {
        Ok(all) => {
            let items = all
                .iter()
                .map(|(id, b)| BoardListItem::from_entry(id, b))
                .collect();
            (items, None)
        }
        Err(e) => {
            log::error!("Error loading boards: {e}");
            (vec![], Some("Error loading boards. Please try again.".to_string()))
        }
    };

    render(BoardsPanelTemplate { ctx, boards, load_error, name, logo_url, errors })
}

pub async fn list(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    panel(&api, &session, String::new(), String::new(), vec![]).await
}

pub async fn create(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    form: web::Form<BoardForm>,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let new_board = match form.to_board() {
        Ok(b) => b,
        Err(msg) => return panel(&api, &session, form.name, form.logo_url, vec![msg]).await,
    };

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, "create_board") else {
        let errors = vec![IN_PROGRESS.to_string()];
        return panel(&api, &session, form.name, form.logo_url, errors).await;
    };

    match board::create(&api, &admin, &new_board).await {
        Ok(()) => {
            set_flash(&session, "Board added successfully!");
            Ok(see_other("/admin/boards"))
        }
        Err(e) => {
            log::error!("Error adding board: {e}");
            let errors = vec![format!("Error adding board: {}", e.message())];
            panel(&api, &session, form.name, form.logo_url, errors).await
        }
    }
}

pub async fn confirm_delete(
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    confirm_delete_page(&session, Kind::Board, &path.into_inner())
}

pub async fn delete(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, Kind::Board.delete_action()) else {
        set_flash(&session, IN_PROGRESS);
        return Ok(see_other(&Kind::Board.panel_href()));
    };

    let outcome = board::delete(&api, &admin, &id).await;
    Ok(finish_delete(&session, Kind::Board, outcome))
}
