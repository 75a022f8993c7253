use actix_web::{HttpRequest, HttpResponse};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::errors::{PortalError, Result};
use crate::models::MessageResponse;
use crate::models::deadlines::{entities::Deadline, requests::SetDeadlineRequest};
use crate::storage::Storage;

pub struct DeadlineService {
    storage: Option<Arc<dyn Storage>>,
}

impl DeadlineService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn set_deadline(
        &self,
        body: SetDeadlineRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        let storage = self.get_storage(request)?;
        set_deadline(storage.as_ref(), &body).await?;
        Ok(HttpResponse::Ok().json(MessageResponse::new("Deadline set successfully")))
    }

    pub async fn list_deadlines(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let storage = self.get_storage(request)?;
        let deadlines = storage.list_deadlines().await?;
        Ok(HttpResponse::Ok().json(deadlines))
    }
}

/// 设置 科目 + 年级 的截止日期，已存在则覆盖
pub async fn set_deadline(storage: &dyn Storage, body: &SetDeadlineRequest) -> Result<Deadline> {
    if body.subject.is_empty() || body.batch.is_empty() || body.deadline.is_empty() {
        return Err(PortalError::validation(
            "Subject, batch and deadline are required",
        ));
    }

    let date = NaiveDate::parse_from_str(body.deadline.trim(), "%Y-%m-%d")?;
    let deadline = storage.upsert_deadline(&body.subject, &body.batch, date).await?;

    info!(
        "Deadline for {} batch {} set to {}",
        deadline.subject, deadline.batch, deadline.deadline
    );
    Ok(deadline)
}
