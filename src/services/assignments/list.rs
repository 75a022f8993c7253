use actix_web::{HttpRequest, HttpResponse};

use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{entities::AssignmentView, requests::AssignmentFilterQuery};
use crate::storage::Storage;

/// 三个条件必须全部给出，缺任意一个返回空列表
pub async fn list_filtered(
    storage: &dyn Storage,
    query: &AssignmentFilterQuery,
) -> Result<Vec<AssignmentView>> {
    match query.as_complete() {
        Some((subject, batch, assignment_number)) => {
            storage
                .list_assignments_by_filter(subject, batch, assignment_number)
                .await
        }
        None => Ok(Vec::new()),
    }
}

pub async fn handle_list_filtered(
    service: &AssignmentService,
    query: AssignmentFilterQuery,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;
    let assignments = list_filtered(storage.as_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(assignments))
}

pub async fn handle_list_by_user(
    service: &AssignmentService,
    user_id: i64,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;
    let assignments = storage.list_assignments_by_user(user_id).await?;
    Ok(HttpResponse::Ok().json(assignments))
}
