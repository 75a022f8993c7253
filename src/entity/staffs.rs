//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staffs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self) -> crate::models::staffs::entities::Staff {
        use crate::models::staffs::entities::Staff;

        Staff {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
            subjects: self.subjects,
        }
    }
}
