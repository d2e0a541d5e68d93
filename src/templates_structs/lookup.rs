use askama::Template;

use crate::models::catalog::SelectOption;
use crate::models::result::ResultCard;

/// The public lookup form.
#[derive(Template)]
#[template(path = "lookup/form.html")]
pub struct LookupTemplate {
    pub course_options: Vec<SelectOption>,
    pub part_options: Vec<SelectOption>,
    pub part_enabled: bool,
    pub board_options: Vec<SelectOption>,
    pub year_options: Vec<SelectOption>,
    pub roll_number: String,
    pub alert: Option<String>,
}

#[derive(Template)]
#[template(path = "lookup/card.html")]
pub struct ResultCardTemplate {
    pub card: ResultCard,
}
