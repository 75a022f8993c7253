use serde::{Deserialize, Serialize};

// 学生账号（users 表），由外部系统创建，这里只读
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    // 学号，用作作业文件名前缀
    pub usn: String,
    pub name: String,
    pub email: String,
    // 明文密码只用于登录比对，不返回给客户端
    #[serde(skip_serializing, default)]
    pub password: String,
    pub semester: Option<String>,
    pub branch: Option<String>,
    // 入学年份
    pub batch: String,
}
