use askama::Template;

use crate::models::board::BoardListItem;
use crate::models::catalog::SelectOption;
use crate::models::course::{CourseListItem, PartDraft};
use crate::models::result::{MarkRow, ResultListItem};
use super::PageContext;

#[derive(Template)]
#[template(path = "admin/results.html")]
pub struct ResultsPanelTemplate {
    pub ctx: PageContext,
    pub results: Vec<ResultListItem>,
    pub load_error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/result_form.html")]
pub struct ResultFormTemplate {
    pub ctx: PageContext,
    pub student_name: String,
    pub father_name: String,
    pub course_options: Vec<SelectOption>,
    pub part_options: Vec<SelectOption>,
    pub part_enabled: bool,
    pub board_options: Vec<SelectOption>,
    pub academic_year: String,
    pub roll_number: String,
    pub verification_number: String,
    pub remarks: String,
    pub principal_signature: String,
    pub exam_controller_signature: String,
    pub mark_rows: Vec<MarkRow>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "admin/courses.html")]
pub struct CoursesPanelTemplate {
    pub ctx: PageContext,
    pub courses: Vec<CourseListItem>,
    pub load_error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/course_form.html")]
pub struct CourseFormTemplate {
    pub ctx: PageContext,
    pub course_name: String,
    pub parts: Vec<PartDraft>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "admin/boards.html")]
pub struct BoardsPanelTemplate {
    pub ctx: PageContext,
    pub boards: Vec<BoardListItem>,
    pub load_error: Option<String>,
    pub name: String,
    pub logo_url: String,
    pub errors: Vec<String>,
}
