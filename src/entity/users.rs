//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub usn: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub batch: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::users::entities::Student {
        use crate::models::users::entities::Student;

        Student {
            id: self.id,
            usn: self.usn,
            name: self.name,
            email: self.email,
            password: self.password,
            semester: self.semester,
            branch: self.branch,
            batch: self.batch,
        }
    }
}
