use actix_web::http::Method;

use crate::api::{ApiClient, ApiError};
use crate::auth::session::AdminSession;
use crate::models::Keyed;
use super::types::{LookupQuery, LookupResponse, ResultList, ResultRecord};

/// Public result lookup. `Ok(None)` means the API found no matching result.
pub async fn check(api: &ApiClient, query: &LookupQuery) -> Result<Option<ResultRecord>, ApiError> {
    let res: LookupResponse = api
        .call("/api/results/check", Method::POST, Some(query), None)
        .await?;
    Ok(res.result)
}

/// Every published result, keyed by result id.
pub async fn find_all(api: &ApiClient, admin: &AdminSession) -> Result<Keyed<ResultRecord>, ApiError> {
    let list: ResultList = api.get("/api/admin/results", Some(admin)).await?;
    Ok(list.results)
}

pub async fn publish(api: &ApiClient, admin: &AdminSession, record: &ResultRecord) -> Result<(), ApiError> {
    api.execute("/api/admin/results", Method::POST, Some(record), Some(admin)).await?;
    log::info!(
        "Result for roll number {} ({}) published by {}",
        record.roll_number, record.course_name, admin.email
    );
    Ok(())
}

pub async fn delete(api: &ApiClient, admin: &AdminSession, id: &str) -> Result<(), ApiError> {
    let endpoint = format!("/api/admin/results/{}", urlencoding::encode(id));
    api.delete(&endpoint, admin).await?;
    log::info!("Result {id} deleted by {}", admin.email);
    Ok(())
}
