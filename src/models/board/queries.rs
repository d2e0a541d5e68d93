use actix_web::http::Method;

use crate::api::{ApiClient, ApiError};
use crate::auth::session::AdminSession;
use crate::models::Keyed;
use super::types::{Board, BoardList};

/// Fetch every board, keyed by board id.
pub async fn find_all(api: &ApiClient) -> Result<Keyed<Board>, ApiError> {
    let list: BoardList = api.get("/api/boards", None).await?;
    Ok(list.boards)
}

pub async fn create(api: &ApiClient, admin: &AdminSession, board: &Board) -> Result<(), ApiError> {
    api.execute("/api/admin/boards", Method::POST, Some(board), Some(admin)).await?;
    log::info!("Board '{}' created by {}", board.name, admin.email);
    Ok(())
}

pub async fn delete(api: &ApiClient, admin: &AdminSession, id: &str) -> Result<(), ApiError> {
    let endpoint = format!("/api/admin/boards/{}", urlencoding::encode(id));
    api.delete(&endpoint, admin).await?;
    log::info!("Board {id} deleted by {}", admin.email);
    Ok(())
}
