//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Relation};
use crate::entity::users::Column as UserColumn;
use crate::errors::{PortalError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentView},
    requests::NewAssignment,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

// 连接查询结果行
#[derive(Debug, FromQueryResult)]
struct AssignmentViewRow {
    id: i64,
    usn: String,
    name: String,
    category: String,
    title: String,
    description: String,
    file: String,
    assignment_number: String,
}

impl From<AssignmentViewRow> for AssignmentView {
    fn from(row: AssignmentViewRow) -> Self {
        AssignmentView {
            id: row.id,
            usn: row.usn,
            name: row.name,
            category: row.category,
            title: row.title,
            description: row.description,
            file: row.file,
            assignment_number: row.assignment_number,
        }
    }
}

impl SeaOrmStorage {
    /// 写入作业记录，ID 由数据库分配
    pub async fn create_assignment_impl(&self, req: NewAssignment) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            subject: Set(req.subject),
            title: Set(req.title),
            description: Set(req.description),
            category: Set(req.category),
            assignment_number: Set(req.assignment_number),
            file: Set(req.file),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入作业记录失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 科目、年级、作业编号三项全部精确匹配
    pub async fn list_assignments_by_filter_impl(
        &self,
        subject: &str,
        batch: &str,
        assignment_number: &str,
    ) -> Result<Vec<AssignmentView>> {
        let rows = Assignments::find()
            .select_only()
            .column(Column::Id)
            .column_as(UserColumn::Usn, "usn")
            .column_as(UserColumn::Name, "name")
            .column(Column::Category)
            .column(Column::Title)
            .column(Column::Description)
            .column(Column::File)
            .column(Column::AssignmentNumber)
            .join(JoinType::InnerJoin, Relation::User.def())
            .filter(Column::Subject.eq(subject))
            .filter(UserColumn::Batch.eq(batch))
            .filter(Column::AssignmentNumber.eq(assignment_number))
            .order_by_asc(Column::Id)
            .into_model::<AssignmentViewRow>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("筛选作业失败: {e}")))?;

        Ok(rows.into_iter().map(AssignmentView::from).collect())
    }

    /// 列出某个学生的全部作业
    pub async fn list_assignments_by_user_impl(&self, user_id: i64) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生作业失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 删除作业记录
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除作业记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
