use serde::{Deserialize, Serialize};

// 科目 + 年级 的提交截止日期
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deadline {
    pub id: i64,
    pub subject: String,
    pub batch: String,
    // YYYY-MM-DD
    pub deadline: chrono::NaiveDate,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
