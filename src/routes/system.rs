use actix_web::{HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::Result;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health() -> Result<HttpResponse> {
    SYSTEM_SERVICE.health().await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/test", web::get().to(health));
}
