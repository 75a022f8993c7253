use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::Result;
use crate::models::assignments::requests::AssignmentFilterQuery;
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn submit_assignment(req: HttpRequest, payload: Multipart) -> Result<HttpResponse> {
    ASSIGNMENT_SERVICE.submit(&req, payload).await
}

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentFilterQuery>,
) -> Result<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_filtered(query.into_inner(), &req)
        .await
}

pub async fn list_user_assignments(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> Result<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_by_user(user_id.into_inner(), &req)
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete(assignment_id.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .service(
                web::resource("")
                    .route(web::post().to(submit_assignment))
                    .route(web::get().to(list_assignments)),
            )
            // GET 按学生 ID 查询，DELETE 按作业 ID 删除
            .service(
                web::resource("/{id}")
                    .route(web::get().to(list_user_assignments))
                    .route(web::delete().to(delete_assignment)),
            ),
    );
}
