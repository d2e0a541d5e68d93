use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
    pub csrf_token: String,
}

/// Yes/no page standing in for a browser confirm dialog.
#[derive(Template)]
#[template(path = "admin/confirm.html")]
pub struct ConfirmTemplate {
    pub ctx: PageContext,
    pub title: String,
    pub message: String,
    pub confirm_action: String,
    pub confirm_label: String,
    pub cancel_href: String,
}
