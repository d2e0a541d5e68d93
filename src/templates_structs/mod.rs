// Template context structures for Askama templates, organized by area.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{require_admin, take_flash};
use crate::errors::AppError;

mod admin;
mod common;
mod lookup;

pub use self::admin::{
    BoardsPanelTemplate, CourseFormTemplate, CoursesPanelTemplate, ResultFormTemplate,
    ResultsPanelTemplate,
};
pub use self::common::{ConfirmTemplate, LoginTemplate};
pub use self::lookup::{LookupTemplate, ResultCardTemplate};

/// Common context shared by all admin pages.
/// Templates access these as `ctx.admin_email`, `ctx.active`, etc.
pub struct PageContext {
    pub admin_email: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    /// Navigation entry to highlight: "results", "courses" or "boards".
    pub active: &'static str,
}

impl PageContext {
    pub fn build(session: &Session, active: &'static str) -> Result<Self, AppError> {
        let admin = require_admin(session)?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        Ok(Self { admin_email: admin.email, flash, csrf_token, active })
    }
}
