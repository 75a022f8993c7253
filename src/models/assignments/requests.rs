use serde::Deserialize;

// GET /assignments?subject=&year=&assignmentNumber=
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentFilterQuery {
    pub subject: Option<String>,
    // 年级（入学年份），对应 users.batch
    pub year: Option<String>,
    #[serde(rename = "assignmentNumber")]
    pub assignment_number: Option<String>,
}

impl AssignmentFilterQuery {
    /// 三个筛选条件必须全部给出，缺任意一个都视为不匹配
    pub fn as_complete(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.subject.as_deref()?,
            self.year.as_deref()?,
            self.assignment_number.as_deref()?,
        ))
    }
}

// 提交表单中的元数据（multipart 文本字段）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentSubmission {
    pub user_id: i64,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub assignment_number: String,
}

// 写入数据库的新作业记录（存储层使用）
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub user_id: i64,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub assignment_number: String,
    pub file: String,
}

impl NewAssignment {
    pub fn from_submission(submission: &AssignmentSubmission, file: impl Into<String>) -> Self {
        Self {
            user_id: submission.user_id,
            subject: submission.subject.clone(),
            title: submission.title.clone(),
            description: submission.description.clone(),
            category: submission.category.clone(),
            assignment_number: submission.assignment_number.clone(),
            file: file.into(),
        }
    }
}
