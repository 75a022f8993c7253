//! 教职工存储操作

use super::SeaOrmStorage;
use crate::entity::staffs::{Column, Entity as Staffs, Model};
use crate::errors::{PortalError, Result};
use crate::models::staffs::entities::Staff;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 邮箱 + 密码精确匹配，取回后在内存里逐字节复核
    pub async fn get_staff_by_credentials_impl(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Staff>> {
        let candidates = Staffs::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Password.eq(password))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教职工失败: {e}")))?;

        Ok(exact_credentials(candidates, email, password).map(|m| m.into_staff()))
    }

    /// 通过姓名获取教职工（重名时取最早的一条）
    pub async fn get_staff_by_name_impl(&self, name: &str) -> Result<Option<Staff>> {
        let candidates = Staffs::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教职工失败: {e}")))?;

        Ok(exact_name(candidates, name).map(|m| m.into_staff()))
    }
}

fn exact_credentials(candidates: Vec<Model>, email: &str, password: &str) -> Option<Model> {
    candidates
        .into_iter()
        .find(|m| m.email == email && m.password == password)
}

/// 数据库比较可能不区分大小写，同名候选里只认逐字节相同的那条
fn exact_name(candidates: Vec<Model>, name: &str) -> Option<Model> {
    candidates.into_iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: i64, name: &str) -> Model {
        Model {
            id,
            name: name.to_string(),
            email: "ravi@example.com".to_string(),
            password: "pw".to_string(),
            subjects: "AI".to_string(),
        }
    }

    #[test]
    fn test_exact_credentials_ignores_case_variants() {
        let mut upper = staff(1, "Ravi");
        upper.email = "RAVI@example.com".to_string();
        let mut wrong_pw = staff(2, "Ravi");
        wrong_pw.password = "PW".to_string();

        assert_eq!(
            exact_credentials(vec![upper.clone(), wrong_pw], "ravi@example.com", "pw"),
            None
        );
        let found = exact_credentials(vec![upper, staff(3, "Ravi")], "ravi@example.com", "pw");
        assert_eq!(found.map(|m| m.id), Some(3));
    }

    #[test]
    fn test_exact_name_ignores_case_variants() {
        assert_eq!(exact_name(vec![staff(1, "RAVI"), staff(2, "ravi")], "Ravi"), None);
        let found = exact_name(vec![staff(1, "RAVI"), staff(2, "Ravi")], "Ravi").unwrap();
        assert_eq!(found.id, 2);
    }
}
