pub mod delete;
pub mod list;
pub mod submit;

pub use submit::SubmissionForm;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::requests::AssignmentFilterQuery;
use crate::storage::Storage;
use crate::uploads::UploadStore;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_uploads(&self, request: &HttpRequest) -> Result<web::Data<UploadStore>> {
        super::uploads_from_request(request)
    }

    // 学生提交作业
    pub async fn submit(&self, request: &HttpRequest, payload: Multipart) -> Result<HttpResponse> {
        submit::handle_submit(self, request, payload).await
    }

    // 教师按 科目 + 年级 + 作业编号 筛选
    pub async fn list_filtered(
        &self,
        query: AssignmentFilterQuery,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        list::handle_list_filtered(self, query, request).await
    }

    // 学生查看自己的提交
    pub async fn list_by_user(&self, user_id: i64, request: &HttpRequest) -> Result<HttpResponse> {
        list::handle_list_by_user(self, user_id, request).await
    }

    // 删除作业（文件 + 记录）
    pub async fn delete(&self, assignment_id: i64, request: &HttpRequest) -> Result<HttpResponse> {
        delete::handle_delete(self, assignment_id, request).await
    }
}
