use actix_web::http::Method;

use crate::api::{ApiClient, ApiError};
use crate::auth::session::AdminSession;
use crate::models::Keyed;
use super::types::{Course, CourseList, NewCourse};

/// Fetch every course, keyed by course id.
pub async fn find_all(api: &ApiClient) -> Result<Keyed<Course>, ApiError> {
    let list: CourseList = api.get("/api/courses", None).await?;
    Ok(list.courses)
}

pub async fn create(api: &ApiClient, admin: &AdminSession, course: &NewCourse) -> Result<(), ApiError> {
    api.execute("/api/admin/courses", Method::POST, Some(course), Some(admin)).await?;
    log::info!("Course '{}' created by {}", course.course_name, admin.email);
    Ok(())
}

pub async fn delete(api: &ApiClient, admin: &AdminSession, id: &str) -> Result<(), ApiError> {
    let endpoint = format!("/api/admin/courses/{}", urlencoding::encode(id));
    api.delete(&endpoint, admin).await?;
    log::info!("Course {id} deleted by {}", admin.email);
    Ok(())
}
