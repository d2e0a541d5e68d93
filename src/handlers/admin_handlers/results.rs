use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::auth::csrf;
use crate::auth::session::{client_id, require_admin, set_flash};
use crate::errors::{AppError, render};
use crate::forms::{get_field, FormPairs};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::{see_other, today};
use crate::inflight::{InFlight, IN_PROGRESS};
use crate::models::catalog::Catalog;
use crate::models::result::{self, ResultForm, ResultListItem};
use crate::templates_structs::{PageContext, ResultFormTemplate, ResultsPanelTemplate};
use super::{confirm_delete_page, finish_delete, Kind};

pub async fn list(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&session)?;
    let ctx = PageContext::build(&session, "results")?;

    let (results, load_error) = match result::find_all(&api, &admin).await {
        Ok(records) => {
            let items = records
                .iter()
                .map(|(id, r)| ResultListItem::from_entry(id, r))
                .collect();
            (items, None)
        }
        Err(e) => {
            log::error!("Error loading results: {e}");
            (vec![], Some("Error loading results. Please try again.".to_string()))
        }
    };

    render(ResultsPanelTemplate { ctx, results, load_error })
}

fn form_page(
    ctx: PageContext,
    form: &ResultForm,
    catalog: &Catalog,
    errors: Vec<String>,
) -> ResultFormTemplate {
    let part_options = catalog.part_options(&form.course_id, &form.part_id);
    ResultFormTemplate {
        ctx,
        student_name: form.student_name.clone(),
        father_name: form.father_name.clone(),
        course_options: catalog.course_options(&form.course_id),
        part_enabled: !part_options.is_empty(),
        part_options,
        board_options: catalog.board_options(&form.board_id),
        academic_year: form.academic_year.clone(),
        roll_number: form.roll_number.clone(),
        verification_number: form.verification_number.clone(),
        remarks: form.remarks.clone(),
        principal_signature: form.principal_signature.clone(),
        exam_controller_signature: form.exam_controller_signature.clone(),
        mark_rows: form.mark_rows(catalog),
        errors,
    }
}

/// The editor needs the full catalog; without it there is nothing to choose from.
async fn load_catalog(api: &ApiClient, session: &Session) -> Result<Catalog, HttpResponse> {
    Catalog::load(api).await.map_err(|e| {
        log::error!("Error loading data: {e}");
        set_flash(session, format!("Error loading data: {}", e.message()));
        see_other("/admin/results")
    })
}

pub async fn new_form(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    let catalog = match load_catalog(&api, &session).await {
        Ok(c) => c,
        Err(redirect) => return Ok(redirect),
    };
    let ctx = PageContext::build(&session, "results")?;
    render(form_page(ctx, &ResultForm::default(), &catalog, vec![]))
}

pub async fn create(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    body: web::Form<FormPairs>,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&session)?;
    let params = body.into_inner();
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;

    let catalog = match load_catalog(&api, &session).await {
        Ok(c) => c,
        Err(redirect) => return Ok(redirect),
    };
    let mut form = ResultForm::from_pairs(&params);
    form.normalize(&catalog);

    if get_field(&params, "action") == "refresh" {
        let ctx = PageContext::build(&session, "results")?;
        return render(form_page(ctx, &form, &catalog, vec![]));
    }

    let record = match form.to_record(&catalog, &today()) {
        Ok(r) => r,
        Err(msg) => {
            let ctx = PageContext::build(&session, "results")?;
            return render(form_page(ctx, &form, &catalog, vec![msg]));
        }
    };

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, "publish_result") else {
        let ctx = PageContext::build(&session, "results")?;
        return render(form_page(ctx, &form, &catalog, vec![IN_PROGRESS.to_string()]));
    };

    match result::publish(&api, &admin, &record).await {
        Ok(()) => {
            set_flash(&session, "Result published successfully!");
            Ok(see_other("/admin/results"))
        }
        Err(e) => {
            log::error!("Error publishing result: {e}");
            let ctx = PageContext::build(&session, "results")?;
            let msg = format!("Error publishing result: {}", e.message());
            render(form_page(ctx, &form, &catalog, vec![msg]))
        }
    }
}

pub async fn confirm_delete(
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    confirm_delete_page(&session, Kind::Result, &path.into_inner())
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
    let Some(_guard) = inflight.try_begin(&client, Kind::Result.delete_action()) else {
        set_flash(&session, IN_PROGRESS);
        return Ok(see_other(&Kind::Result.panel_href()));
    };

    let outcome = result::delete(&api, &admin, &id).await;
    Ok(finish_delete(&session, Kind::Result, outcome))
}
