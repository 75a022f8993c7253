use actix_web::{HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::MessageResponse;
use crate::storage::Storage;
use crate::uploads::UploadStore;

/// 先删文件再删记录
///
/// 文件已经不存在时照常删除记录；文件删除失败时不动数据库。
/// 记录删除失败时文件已经没了，只能记一条 error 日志留待人工核对。
pub async fn delete_assignment(
    storage: &dyn Storage,
    uploads: &UploadStore,
    assignment_id: i64,
) -> Result<()> {
    let assignment = storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| PortalError::not_found("Assignment not found"))?;

    if !uploads.remove(&assignment.subject, &assignment.file)? {
        warn!(
            "File {}/{} of assignment {} was already missing",
            assignment.subject, assignment.file, assignment_id
        );
    }

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => {
            info!("Assignment {} deleted", assignment_id);
            Ok(())
        }
        Ok(false) => {
            warn!("Assignment {} row disappeared before delete", assignment_id);
            Ok(())
        }
        Err(e) => {
            error!(
                "Orphaned assignment row {} (file {}/{} already removed): {}",
                assignment_id, assignment.subject, assignment.file, e
            );
            Err(e)
        }
    }
}

pub async fn handle_delete(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;
    let uploads = service.get_uploads(request)?;

    delete_assignment(storage.as_ref(), &uploads, assignment_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Assignment deleted successfully")))
}
