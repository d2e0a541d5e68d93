use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Datelike;
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::session::client_id;
use crate::errors::{AppError, render};
use crate::inflight::{InFlight, IN_PROGRESS};
use crate::models::catalog::{Catalog, SelectOption};
use crate::models::result::{self, LookupQuery, ResultCard};
use crate::templates_structs::{LookupTemplate, ResultCardTemplate};

/// How many academic years the lookup form offers, counting back from this year.
const YEARS_OFFERED: i32 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub part_id: String,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub board_id: String,
    #[serde(default)]
    pub roll_number: String,
    /// `refresh` when a cascading select changed rather than the form being submitted.
    #[serde(default)]
    pub action: Option<String>,
}

impl LookupForm {
    /// The lookup request body, or `None` when any of the five fields is blank.
    pub fn to_query(&self) -> Option<LookupQuery> {
        let query = LookupQuery {
            course_id: self.course_id.trim().to_string(),
            part_id: self.part_id.trim().to_string(),
            academic_year: self.academic_year.trim().to_string(),
            board_id: self.board_id.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
        };
        let complete = [
            &query.course_id,
            &query.part_id,
            &query.academic_year,
            &query.board_id,
            &query.roll_number,
        ]
        .iter()
        .all(|v| !v.is_empty());
        complete.then_some(query)
    }
}

/// Academic years from `current` back, newest first. A selected year outside the
/// range is kept so a re-rendered form does not lose it.
pub fn academic_year_options(current: i32, selected: &str) -> Vec<SelectOption> {
    let mut years: Vec<SelectOption> = (0..YEARS_OFFERED)
        .map(|back| {
            let year = (current - back).to_string();
            SelectOption { selected: year == selected, label: year.clone(), value: year }
        })
        .collect();
    if !selected.is_empty() && !years.iter().any(|y| y.selected) {
        years.push(SelectOption {
            value: selected.to_string(),
            label: selected.to_string(),
            selected: true,
        });
    }
    years
}

fn form_page(catalog: &Catalog, form: &LookupForm, alert: Option<String>) -> LookupTemplate {
    let part_options = catalog.part_options(&form.course_id, &form.part_id);
    LookupTemplate {
        course_options: catalog.course_options(&form.course_id),
        part_enabled: !part_options.is_empty(),
        part_options,
        board_options: catalog.board_options(&form.board_id),
        year_options: academic_year_options(chrono::Local::now().year(), &form.academic_year),
        roll_number: form.roll_number.clone(),
        alert,
    }
}

/// GET /: the lookup form with every selection reset.
pub async fn index(api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::load_public(&api).await;
    render(form_page(&catalog, &LookupForm::default(), None))
}

/// POST /results/check: cascade refresh or result lookup.
pub async fn check(
    api: web::Data<ApiClient>,
    inflight: web::Data<InFlight>,
    session: Session,
    form: web::Form<LookupForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    let catalog = Catalog::load_public(&api).await;
    let refresh = form.action.as_deref() == Some("refresh");

    // A failed or partial catalog load must not blank a submitted part.
    if refresh || catalog.course(&form.course_id).is_some() {
        form.part_id = catalog.valid_part_id(&form.course_id, &form.part_id);
    }

    if refresh {
        return render(form_page(&catalog, &form, None));
    }

    let Some(query) = form.to_query() else {
        return render(form_page(&catalog, &form, Some("Please fill all required fields".to_string())));
    };

    let client = client_id(&session);
    let Some(_guard) = inflight.try_begin(&client, "lookup") else {
        return render(form_page(&catalog, &form, Some(IN_PROGRESS.to_string())));
    };

    match result::check(&api, &query).await {
        Ok(Some(record)) => {
            let card = ResultCard::build(&record, &super::today());
            render(ResultCardTemplate { card })
        }
        Ok(None) => {
            log::info!("No result for roll number {}", query.roll_number);
            let alert = "No result found for this roll number".to_string();
            render(form_page(&catalog, &form, Some(alert)))
        }
        Err(e) => {
            log::error!("Error: {e}");
            let alert = match e.message() {
                "" => "Error loading result. Please try again.".to_string(),
                m => m.to_string(),
            };
            render(form_page(&catalog, &form, Some(alert)))
        }
    }
}
