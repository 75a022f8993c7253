use serde::{Deserialize, Serialize};

// 作业提交记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub user_id: i64,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub assignment_number: String,
    // 存储文件名：<usn>.<assignment_number><ext>
    pub file: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

// 教师筛选视图（assignments INNER JOIN users）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentView {
    pub id: i64,
    pub usn: String,
    pub name: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub file: String,
    pub assignment_number: String,
}
