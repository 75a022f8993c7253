use actix_web::{HttpRequest, HttpResponse, http::header};

use super::FileService;
use crate::errors::{PortalError, Result};
use crate::uploads::file_extension;

/// 按扩展名推断内容类型
pub fn content_type_for(file: &str) -> &'static str {
    match file_extension(file).as_deref() {
        Some(".pdf") => "application/pdf",
        Some(".mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    subject: String,
    file: String,
) -> Result<HttpResponse> {
    let uploads = service.get_uploads(request)?;

    let data = uploads
        .read(&subject, &file)?
        .ok_or_else(|| PortalError::not_found("File not found"))?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&file)))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{file}\""),
        ))
        .body(data))
}
