pub mod download;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::Result;
use crate::uploads::UploadStore;

pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_uploads(&self, request: &HttpRequest) -> Result<web::Data<UploadStore>> {
        super::uploads_from_request(request)
    }

    // 读取已提交的作业文件
    pub async fn handle_download(
        &self,
        request: &HttpRequest,
        subject: String,
        file: String,
    ) -> Result<HttpResponse> {
        download::handle_download(self, request, subject, file).await
    }
}
