//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::deadlines::{
    ActiveModel as DeadlineActiveModel, Entity as Deadlines, Model as DeadlineModel,
};
pub use super::staffs::{ActiveModel as StaffActiveModel, Entity as Staffs, Model as StaffModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
