pub mod boards;
pub mod courses;
pub mod results;

use actix_session::Session;
use actix_web::HttpResponse;

use crate::api::ApiError;
use crate::auth::session::set_flash;
use crate::errors::{AppError, render};
use crate::templates_structs::{ConfirmTemplate, PageContext};
use super::see_other;

/// GET /admin: the results panel is the dashboard landing page.
pub async fn index() -> HttpResponse {
    see_other("/admin/results")
}

/// Record kinds that share the list / confirm / delete flow.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Kind {
    Result,
    Course,
    Board,
}

impl Kind {
    fn noun(self) -> &'static str {
        match self {
            Kind::Result => "result",
            Kind::Course => "course",
            Kind::Board => "board",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Kind::Result => "Result",
            Kind::Course => "Course",
            Kind::Board => "Board",
        }
    }

    /// Navigation key; also the path segment under /admin.
    pub(crate) fn panel(self) -> &'static str {
        match self {
            Kind::Result => "results",
            Kind::Course => "courses",
            Kind::Board => "boards",
        }
    }

    pub(crate) fn panel_href(self) -> String {
        format!("/admin/{}", self.panel())
    }

    pub(crate) fn delete_action(self) -> &'static str {
        match self {
            Kind::Result => "delete_result",
            Kind::Course => "delete_course",
            Kind::Board => "delete_board",
        }
    }
}

/// Confirmation page in front of every delete.
pub(crate) fn confirm_delete_page(session: &Session, kind: Kind, id: &str) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, kind.panel())?;
    render(ConfirmTemplate {
        ctx,
        title: format!("Delete {}", kind.title()),
        message: format!("Are you sure you want to delete this {}?", kind.noun()),
        confirm_action: format!("{}/{}/delete", kind.panel_href(), urlencoding::encode(id)),
        confirm_label: "Delete".to_string(),
        cancel_href: kind.panel_href(),
    })
}

/// Flash the outcome of a delete and send the browser back to the panel, which refetches.
pub(crate) fn finish_delete(session: &Session, kind: Kind, outcome: Result<(), ApiError>) -> HttpResponse {
    match outcome {
        Ok(()) => set_flash(session, format!("{} deleted successfully!", kind.title())),
        Err(e) => set_flash(session, format!("Error deleting {}: {}", kind.noun(), e.message())),
    }
    see_other(&kind.panel_href())
}
