use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::errors::{PortalError, Result};
use crate::models::auth::SubjectQuery;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_subjects(
        &self,
        query: SubjectQuery,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        let storage = self.get_storage(request)?;
        let subjects = subjects_for_staff(storage.as_ref(), query.name.as_deref()).await?;
        Ok(HttpResponse::Ok().json(subjects))
    }
}

/// 教职工负责的科目列表（逗号拆分，原样保留空白和空项）
pub async fn subjects_for_staff(storage: &dyn Storage, name: Option<&str>) -> Result<Vec<String>> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(PortalError::validation("Staff name is required")),
    };

    let staff = storage
        .get_staff_by_name(name)
        .await?
        .ok_or_else(|| PortalError::not_found("No subjects found for this staff"))?;

    Ok(staff.subject_list())
}
