use actix_web::{HttpRequest, HttpResponse};
use tracing::{debug, info};

use super::AuthService;
use crate::errors::{PortalError, Result};
use crate::models::auth::{AuthenticatedAccount, LoginQuery};
use crate::storage::Storage;

/// 先查学生表，再查教职工表
///
/// 两张表都命中时按学生处理。缺少邮箱或密码视为不匹配。
pub async fn login(
    storage: &dyn Storage,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<AuthenticatedAccount> {
    let (Some(email), Some(password)) = (email, password) else {
        debug!("Login attempt without email or password");
        return Err(no_match());
    };

    if let Some(student) = storage.get_student_by_credentials(email, password).await? {
        return Ok(AuthenticatedAccount::User(student));
    }

    if let Some(staff) = storage.get_staff_by_credentials(email, password).await? {
        return Ok(AuthenticatedAccount::Staff(staff));
    }

    Err(no_match())
}

fn no_match() -> PortalError {
    PortalError::authentication("No user or staff found with these credentials")
}

pub async fn handle_login(
    service: &AuthService,
    query: LoginQuery,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;

    let account = login(
        storage.as_ref(),
        query.email.as_deref(),
        query.password.as_deref(),
    )
    .await?;

    info!("{} {} logged in", account.role(), account.email());

    // 前端按数组读取第一条
    Ok(HttpResponse::Ok().json(vec![account]))
}
