use serde::{Deserialize, Serialize};

// 教职工账号（staffs 表）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    // 逗号拼接的科目列表，原样存储
    pub subjects: String,
}

impl Staff {
    /// 拆分科目列表
    pub fn subject_list(&self) -> Vec<String> {
        split_subjects(&self.subjects)
    }
}

/// 按 `,` 拆分科目字符串
///
/// 不做 trim，也不过滤空项：`"AI, ML,"` 会得到 `["AI", " ML", ""]`。
/// 调用方需要自己容忍空白和空字符串。
pub fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_whitespace_and_empty_entries() {
        assert_eq!(split_subjects("AI, ML,"), vec!["AI", " ML", ""]);
    }

    #[test]
    fn test_split_single_subject() {
        assert_eq!(split_subjects("DBMS"), vec!["DBMS"]);
    }

    #[test]
    fn test_split_empty_string_yields_one_empty_entry() {
        assert_eq!(split_subjects(""), vec![""]);
    }
}
