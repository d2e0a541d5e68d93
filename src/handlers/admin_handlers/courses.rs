use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::auth::csrf;
use crate::auth::session::{client_id, require_admin, set_flash};
use crate::errors::{AppError, render};
use crate::forms::{get_field, FormPairs};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::see_other;
use crate::inflight::{InFlight, IN_PROGRESS};
use crate::models::course::{self, CourseForm, CourseListItem};
use crate::templates_structs::{CourseFormTemplate, CoursesPanelTemplate, PageContext};
use super::{confirm_delete_page, finish_delete, Kind};

pub async fn list(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    let ctx = PageContext::build(&session, "courses")?;

    let (courses, load_error) = match course::find_all(&api).await {
        Ok(all) => {
            let items = all
                .iter()
                .map(|(id, c)| CourseListItem::from_entry(id, c))
                .collect();
            (items, None)
        }
        Err(e) => {
            log::error!("Error loading courses: {e}");
            (vec![], Some("Error loading courses. Please try again.".to_string()))
        }
    };

    render(CoursesPanelTemplate { ctx, courses, load_error })
}

fn form_page(session: &Session, form: CourseForm, errors: Vec<String>) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, "courses")?;
    render(CourseFormTemplate {
        ctx,
        course_name: form.course_name,
        parts: form.parts,
        errors,
    })
}

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    form_page(&session, CourseForm::default(), vec![])
}

/// Row edits (`add_part`, `remove_part:<index>`) re-render the editor; anything else saves.
pub async fn create(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    body: web::Form<FormPairs>,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&session)?;
    let params = body.into_inner();
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;

    let mut form = CourseForm::from_pairs(&params);
    let action = get_field(&params, "action");
    if action == "add_part" {
        form.add_part();
        return form_page(&session, form, vec![]);
    }
    if let Some(index) = action.strip_prefix("remove_part:") {
        if let Ok(i) = index.parse::<usize>() {
            form.remove_part(i);
        }
        return form_page(&session, form, vec![]);
    }

    let new_course = match form.to_new_course() {
        Ok(c) => c,
        Err(msg) => return form_page(&session, form, vec![msg]),
    };

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, "create_course") else {
        return form_page(&session, form, vec![IN_PROGRESS.to_string()]);
    };

    match course::create(&api, &admin, &new_course).await {
        Ok(()) => {
            set_flash(&session, "Course created successfully!");
            Ok(see_other("/admin/courses"))
        }
        Err(e) => {
            log::error!("Error creating course: {e}");
            let msg = format!("Error creating course: {}", e.message());
            form_page(&session, form, vec![msg])
        }
    }
}

pub async fn confirm_delete(
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    confirm_delete_page(&session, Kind::Course, &path.into_inner())
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
    let Some(_guard) = inflight.try_begin(&client, Kind::Course.delete_action()) else {
        set_flash(&session, IN_PROGRESS);
        return Ok(see_other(&Kind::Course.panel_href()));
    };

    let outcome = course::delete(&api, &admin, &id).await;
    Ok(finish_delete(&session, Kind::Course, outcome))
}
