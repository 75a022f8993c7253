use serde::Serialize;

use crate::models::staffs::entities::Staff;
use crate::models::users::entities::Student;

/// 登录成功的账号，序列化时把行数据和 `role` 字段平铺在同一个对象里
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum AuthenticatedAccount {
    User(Student),
    Staff(Staff),
}

impl AuthenticatedAccount {
    pub const USER: &'static str = "user";
    pub const STAFF: &'static str = "staff";

    pub fn role(&self) -> &'static str {
        match self {
            AuthenticatedAccount::User(_) => Self::USER,
            AuthenticatedAccount::Staff(_) => Self::STAFF,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            AuthenticatedAccount::User(student) => &student.email,
            AuthenticatedAccount::Staff(staff) => &staff.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        Student {
            id: 7,
            usn: "1AB20CS007".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "secret".into(),
            semester: Some("5".into()),
            branch: Some("CSE".into()),
            batch: "2020".into(),
        }
    }

    #[test]
    fn test_user_row_is_tagged_with_role() {
        let json = serde_json::to_value(AuthenticatedAccount::User(student())).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["id"], 7);
        assert_eq!(json["usn"], "1AB20CS007");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_staff_row_is_tagged_with_role() {
        let staff = Staff {
            id: 1,
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            password: "pw".into(),
            subjects: "AI,ML".into(),
        };
        let account = AuthenticatedAccount::Staff(staff);
        assert_eq!(account.role(), "staff");

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["role"], "staff");
        assert_eq!(json["subjects"], "AI,ML");
    }
}
