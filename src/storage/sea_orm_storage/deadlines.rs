//! 截止日期存储操作

use super::SeaOrmStorage;
use crate::entity::deadlines::{ActiveModel, Column, Entity as Deadlines};
use crate::errors::{PortalError, Result};
use crate::models::deadlines::entities::Deadline;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 同一 科目 + 年级 已存在时覆盖日期，否则新建
    pub async fn upsert_deadline_impl(
        &self,
        subject: &str,
        batch: &str,
        deadline: chrono::NaiveDate,
    ) -> Result<Deadline> {
        let now = chrono::Utc::now().timestamp();
        let deadline = deadline.format("%Y-%m-%d").to_string();

        let existing = Deadlines::find()
            .filter(Column::Subject.eq(subject))
            .filter(Column::Batch.eq(batch))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询截止日期失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.deadline = Set(deadline);
                active.updated_at = Set(now);
                active.update(&self.db).await.map_err(|e| {
                    PortalError::database_operation(format!("更新截止日期失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    subject: Set(subject.to_string()),
                    batch: Set(batch.to_string()),
                    deadline: Set(deadline),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    PortalError::database_operation(format!("创建截止日期失败: {e}"))
                })?
            }
        };

        Ok(result.into_deadline())
    }

    /// 列出全部截止日期
    pub async fn list_deadlines_impl(&self) -> Result<Vec<Deadline>> {
        let results = Deadlines::find()
            .order_by_asc(Column::Subject)
            .order_by_asc(Column::Batch)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询截止日期失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_deadline()).collect())
    }
}
