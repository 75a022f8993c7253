use serde::{Deserialize, Serialize};

use super::entities::Assignment;

/// 提交成功后的响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedAssignment {
    pub id: i64,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub assignment_number: String,
    pub file: String,
    /// 公开下载路径 /uploads/<subject>/<file>
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl SubmittedAssignment {
    pub fn from_assignment(assignment: Assignment) -> Self {
        let file_path = public_file_path(&assignment.subject, &assignment.file);
        Self {
            id: assignment.id,
            subject: assignment.subject,
            title: assignment.title,
            description: assignment.description,
            category: assignment.category,
            assignment_number: assignment.assignment_number,
            file: assignment.file,
            file_path,
        }
    }
}

pub fn public_file_path(subject: &str, file: &str) -> String {
    format!("/uploads/{subject}/{file}")
}
