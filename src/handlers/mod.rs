pub mod admin_handlers;
pub mod auth_handlers;
pub mod lookup_handlers;

use actix_web::{web, HttpResponse};

use crate::auth::middleware::require_admin;

/// Today's date in `YYYY-MM-DD`, local time.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Register every portal route. Static files and the 404 fallback are added by the binary.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use admin_handlers::{boards, courses, results};

    cfg
        // Public routes
        .route("/", web::get().to(lookup_handlers::index))
        .route("/results/check", web::post().to(lookup_handlers::check))
        .route("/admin/login", web::get().to(auth_handlers::login_page))
        .route("/admin/login", web::post().to(auth_handlers::login_submit))
        // Admin routes, /x/new BEFORE /x/{id}
        .service(
            web::scope("/admin")
                .wrap(actix_web::middleware::from_fn(require_admin))
                .route("", web::get().to(admin_handlers::index))
                .route("/logout", web::get().to(auth_handlers::logout_confirm))
                .route("/logout", web::post().to(auth_handlers::logout))
                .route("/results", web::get().to(results::list))
                .route("/results", web::post().to(results::create))
                .route("/results/new", web::get().to(results::new_form))
                .route("/results/{id}/delete", web::get().to(results::confirm_delete))
                .route("/results/{id}/delete", web::post().to(results::delete))
                .route("/courses", web::get().to(courses::list))
                .route("/courses", web::post().to(courses::create))
                .route("/courses/new", web::get().to(courses::new_form))
                .route("/courses/{id}/delete", web::get().to(courses::confirm_delete))
                .route("/courses/{id}/delete", web::post().to(courses::delete))
                .route("/boards", web::get().to(boards::list))
                .route("/boards", web::post().to(boards::create))
                .route("/boards/{id}/delete", web::get().to(boards::confirm_delete))
                .route("/boards/{id}/delete", web::post().to(boards::delete)),
        );
}
