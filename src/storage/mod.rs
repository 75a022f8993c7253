use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentView},
        requests::NewAssignment,
    },
    deadlines::entities::Deadline,
    staffs::entities::Staff,
    users::entities::Student,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号查询方法
    // 通过邮箱 + 密码精确匹配学生
    async fn get_student_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Student>>;
    // 通过邮箱 + 密码精确匹配教职工
    async fn get_staff_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Staff>>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过姓名获取教职工
    async fn get_staff_by_name(&self, name: &str) -> Result<Option<Staff>>;

    /// 作业管理方法
    // 写入作业记录
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 按 科目 + 年级 + 作业编号 精确筛选（连接学生表）
    async fn list_assignments_by_filter(
        &self,
        subject: &str,
        batch: &str,
        assignment_number: &str,
    ) -> Result<Vec<AssignmentView>>;
    // 列出某个学生的全部作业
    async fn list_assignments_by_user(&self, user_id: i64) -> Result<Vec<Assignment>>;
    // 删除作业记录
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 截止日期方法
    // 设置（或覆盖）科目 + 年级 的截止日期
    async fn upsert_deadline(
        &self,
        subject: &str,
        batch: &str,
        deadline: chrono::NaiveDate,
    ) -> Result<Deadline>;
    // 列出全部截止日期
    async fn list_deadlines(&self) -> Result<Vec<Deadline>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
