pub mod assignments;
pub mod auth;
pub mod deadlines;
pub mod files;
pub mod subjects;
pub mod system;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use deadlines::DeadlineService;
pub use files::FileService;
pub use subjects::SubjectService;
pub use system::SystemService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::errors::{PortalError, Result};
use crate::storage::Storage;
use crate::uploads::UploadStore;

/// 从 app_data 取出共享存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| PortalError::database_connection("Storage not found in app data"))
}

/// 从 app_data 取出上传文件存储
pub(crate) fn uploads_from_request(request: &HttpRequest) -> Result<web::Data<UploadStore>> {
    request
        .app_data::<web::Data<UploadStore>>()
        .cloned()
        .ok_or_else(|| PortalError::storage("Upload store not found in app data"))
}
