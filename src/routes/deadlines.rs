use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::Result;
use crate::models::deadlines::requests::SetDeadlineRequest;
use crate::services::DeadlineService;

static DEADLINE_SERVICE: Lazy<DeadlineService> = Lazy::new(DeadlineService::new_lazy);

pub async fn set_deadline(
    req: HttpRequest,
    body: web::Json<SetDeadlineRequest>,
) -> Result<HttpResponse> {
    DEADLINE_SERVICE.set_deadline(body.into_inner(), &req).await
}

pub async fn list_deadlines(req: HttpRequest) -> Result<HttpResponse> {
    DEADLINE_SERVICE.list_deadlines(&req).await
}

pub fn configure_deadline_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/deadlines")
            .route(web::post().to(set_deadline))
            .route(web::get().to(list_deadlines)),
    );
}
