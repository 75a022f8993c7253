//! 截止日期实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deadlines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject: String,
    pub batch: String,
    pub deadline: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_deadline(self) -> crate::models::deadlines::entities::Deadline {
        use crate::models::deadlines::entities::Deadline;
        use chrono::{DateTime, NaiveDate, Utc};

        Deadline {
            id: self.id,
            subject: self.subject,
            batch: self.batch,
            deadline: NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d").unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
