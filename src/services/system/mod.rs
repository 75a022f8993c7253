use actix_web::HttpResponse;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::HealthResponse;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 存活探针
    pub async fn health(&self) -> Result<HttpResponse> {
        tracing::trace!("Health check for {}", self.get_config().app.system_name);
        Ok(HttpResponse::Ok().json(HealthResponse { ok: true }))
    }
}
