//! 数据模型定义
//!
//! 与 entity 模块分离：这里是对外（HTTP）和业务层使用的结构。

pub mod assignments;
pub mod auth;
pub mod common;
pub mod deadlines;
pub mod staffs;
pub mod users;

pub use common::response::{ErrorResponse, HealthResponse, MessageResponse};
