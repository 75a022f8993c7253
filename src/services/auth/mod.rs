pub mod login;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::LoginQuery;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 邮箱 + 密码登录（学生优先，其次教职工）
    pub async fn login(&self, query: LoginQuery, request: &HttpRequest) -> Result<HttpResponse> {
        login::handle_login(self, query, request).await
    }
}
