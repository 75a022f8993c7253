use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::Result;
use crate::models::auth::SubjectQuery;
use crate::services::SubjectService;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectQuery>,
) -> Result<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(query.into_inner(), &req).await
}

pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/subjects", web::get().to(list_subjects));
}
