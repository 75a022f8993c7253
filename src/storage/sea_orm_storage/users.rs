//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::users::{Column, Entity as Users, Model};
use crate::errors::{PortalError, Result};
use crate::models::users::entities::Student;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 邮箱 + 密码精确匹配（区分大小写，明文比对）
    pub async fn get_student_by_credentials_impl(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Student>> {
        let candidates = Users::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Password.eq(password))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(exact_credentials(candidates, email, password).map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }
}

/// 数据库比较可能不区分大小写（如 MySQL 的 `*_ci` 排序规则），候选行取回后逐字节复核
fn exact_credentials(candidates: Vec<Model>, email: &str, password: &str) -> Option<Model> {
    candidates
        .into_iter()
        .find(|m| m.email == email && m.password == password)
}
