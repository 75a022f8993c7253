use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::collections::HashMap;
use tracing::{error, info, warn};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::{
    requests::{AssignmentSubmission, NewAssignment},
    responses::SubmittedAssignment,
};
use crate::storage::Storage;
use crate::uploads::{StagedUpload, UploadStore, stored_file_name};
use crate::utils::validate_path_segment;

/// 单个文本字段的最大字节数
pub const MAX_FIELD_SIZE: usize = 64 * 1024;

/// multipart 表单：文本字段 + 至多一个暂存文件
#[derive(Debug, Default)]
pub struct SubmissionForm {
    fields: HashMap<String, String>,
    file: Option<StagedUpload>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn with_file(mut self, staged: StagedUpload) -> Self {
        self.file = Some(staged);
        self
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// 拆成元数据和暂存文件
    pub fn into_parts(self) -> Result<(AssignmentSubmission, StagedUpload)> {
        let user_id = self.fields.get("user_id").map(|v| v.trim().parse::<i64>());

        let submission = AssignmentSubmission {
            user_id: 0,
            subject: self.field("subject"),
            title: self.field("title"),
            description: self.field("description"),
            category: self.field("category"),
            assignment_number: self.field("assignment_number"),
        };

        let staged = self
            .file
            .ok_or_else(|| PortalError::validation("No file uploaded"))?;

        let user_id = match user_id {
            Some(Ok(id)) => id,
            _ => return Err(PortalError::validation("A numeric user_id is required")),
        };

        Ok((
            AssignmentSubmission {
                user_id,
                ..submission
            },
            staged,
        ))
    }
}

/// 提交流程
///
/// 1. 没有文件 / user_id 非法：Validation
/// 2. 学生不存在：NotFound
/// 3. 扩展名不在白名单：Validation
/// 4. 存储名 `<usn>.<assignment_number><ext>`，移动到 `<root>/<subject>/`
/// 5. 写数据库，失败则删除刚移动的文件并恢复被覆盖的旧文件
///
/// 任何一步失败，暂存文件都会随 `StagedUpload` 的 drop 被清理。
pub async fn submit_assignment(
    storage: &dyn Storage,
    uploads: &UploadStore,
    form: SubmissionForm,
) -> Result<SubmittedAssignment> {
    let (submission, staged) = form.into_parts()?;

    let student = storage
        .get_student_by_id(submission.user_id)
        .await?
        .ok_or_else(|| PortalError::not_found("User not found"))?;

    let extension = uploads
        .allowed_extension(staged.original_name())
        .ok_or_else(|| {
            PortalError::validation("Invalid file type. Only PDF and MP4 are allowed.")
        })?;

    uploads.subject_dir(&submission.subject)?;
    validate_path_segment(&submission.assignment_number).map_err(|reason| {
        PortalError::validation(format!("Invalid assignment number: {reason}"))
    })?;

    let stored_name = stored_file_name(&student.usn, &submission.assignment_number, &extension);
    let size = staged.size();
    let persisted = uploads.persist(staged, &submission.subject, &stored_name)?;
    let destination = persisted.destination().to_path_buf();
    let replaced = persisted.replaced_existing();

    let record = NewAssignment::from_submission(&submission, stored_name.as_str());
    let assignment = match storage.create_assignment(record).await {
        Ok(assignment) => assignment,
        Err(e) => {
            // 补偿：撤销这次落盘，覆盖过的旧文件放回原处
            if let Err(rollback_err) = persisted.rollback() {
                error!(
                    "Failed to roll back {} after insert failure: {}",
                    destination.display(),
                    rollback_err
                );
            }
            return Err(e);
        }
    };

    if let Err(e) = persisted.commit() {
        warn!("Assignment {} stored, but: {}", assignment.id, e);
    }

    info!(
        "Assignment {} submitted by {} as {} ({} bytes{})",
        assignment.id,
        student.usn,
        destination.display(),
        size,
        if replaced { ", replaced previous file" } else { "" }
    );

    Ok(SubmittedAssignment::from_assignment(assignment))
}

/// 读取 multipart 请求体，文件部分边读边写入暂存目录
pub async fn read_submission_form(
    uploads: &UploadStore,
    payload: &mut Multipart,
) -> Result<SubmissionForm> {
    let mut form = SubmissionForm::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PortalError::validation(format!("Invalid multipart body: {e}")))?
    {
        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(|s| s.to_string()),
            ),
            None => (String::new(), None),
        };

        if name == "file" {
            // 浏览器在未选择文件时也会发送一个空文件名的字段
            let Some(file_name) = file_name.filter(|n| !n.is_empty()) else {
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|e| PortalError::validation(format!("读取上传数据失败: {e}")))?;
                }
                continue;
            };

            if form.has_file() {
                return Err(PortalError::validation(
                    "Only one file can be uploaded at a time",
                ));
            }

            let mut staged = uploads.stage(&file_name)?;
            while let Some(chunk) = field.next().await {
                let data =
                    chunk.map_err(|e| PortalError::validation(format!("读取上传数据失败: {e}")))?;
                staged.write_chunk(&data)?;
            }
            form = form.with_file(staged);
        } else {
            let mut value = Vec::new();
            while let Some(chunk) = field.next().await {
                let data =
                    chunk.map_err(|e| PortalError::validation(format!("读取表单字段失败: {e}")))?;
                append_field_chunk(&mut value, &data, &name)?;
            }
            form.set_field(&name, String::from_utf8_lossy(&value).into_owned());
        }
    }

    Ok(form)
}

/// 追加文本字段数据，超过 `MAX_FIELD_SIZE` 时返回 Validation 错误
fn append_field_chunk(value: &mut Vec<u8>, data: &[u8], name: &str) -> Result<()> {
    if value.len() + data.len() > MAX_FIELD_SIZE {
        return Err(PortalError::validation(format!(
            "Form field {name} exceeds the limit of {MAX_FIELD_SIZE} bytes"
        )));
    }
    value.extend_from_slice(data);
    Ok(())
}

pub async fn handle_submit(
    service: &AssignmentService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;
    let uploads = service.get_uploads(request)?;

    let form = read_submission_form(&uploads, &mut payload).await?;
    let submitted = submit_assignment(storage.as_ref(), &uploads, form).await?;

    Ok(HttpResponse::Ok().json(submitted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_uploads() -> UploadStore {
        let base = std::env::temp_dir().join(format!("portal-form-{}", uuid::Uuid::new_v4()));
        UploadStore::new(
            base.join("assignments"),
            base.join("staging"),
            1024,
            vec![".pdf".into(), ".mp4".into()],
        )
    }

    #[test]
    fn test_form_without_file_is_rejected() {
        let form = SubmissionForm::new().with_field("user_id", "7");
        let err = form.into_parts().unwrap_err();
        assert_eq!(err.code(), "E005");
        assert_eq!(err.message(), "No file uploaded");
    }

    #[test]
    fn test_form_with_non_numeric_user_id_is_rejected() {
        let uploads = temp_uploads();
        let staged = uploads.stage("report.pdf").unwrap();
        let staged_path = staged.path().to_path_buf();

        let form = SubmissionForm::new()
            .with_field("user_id", "seven")
            .with_file(staged);
        let err = form.into_parts().unwrap_err();

        assert_eq!(err.code(), "E005");
        assert!(!staged_path.exists());
    }

    #[test]
    fn test_form_into_parts() {
        let uploads = temp_uploads();
        let staged = uploads.stage("report.PDF").unwrap();

        let form = SubmissionForm::new()
            .with_field("user_id", " 7 ")
            .with_field("subject", "AI")
            .with_field("title", "Search")
            .with_field("assignment_number", "1")
            .with_file(staged);
        let (submission, staged) = form.into_parts().unwrap();

        assert_eq!(submission.user_id, 7);
        assert_eq!(submission.subject, "AI");
        assert_eq!(submission.title, "Search");
        assert_eq!(submission.description, "");
        assert_eq!(submission.assignment_number, "1");
        assert_eq!(staged.original_name(), "report.PDF");
    }

    #[test]
    fn test_field_chunks_are_capped() {
        let mut value = Vec::new();
        append_field_chunk(&mut value, &[b'a'; MAX_FIELD_SIZE - 1], "title").unwrap();
        append_field_chunk(&mut value, b"b", "title").unwrap();
        assert_eq!(value.len(), MAX_FIELD_SIZE);

        let err = append_field_chunk(&mut value, b"c", "title").unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("title"));
        assert_eq!(value.len(), MAX_FIELD_SIZE);
    }
}
