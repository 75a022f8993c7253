pub mod assignments;

pub mod auth;

pub mod deadlines;

pub mod files;

pub mod frontend;

pub mod subjects;

pub mod system;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use deadlines::configure_deadline_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;

/// 挂载全部 API 路由（不含前端 fallback）
pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    configure_system_routes(cfg);
    configure_auth_routes(cfg);
    configure_subject_routes(cfg);
    configure_assignment_routes(cfg);
    configure_deadline_routes(cfg);
    configure_file_routes(cfg);
}
