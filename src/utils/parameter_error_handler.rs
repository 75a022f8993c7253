//! 请求参数解析失败时的统一处理
//!
//! actix 默认返回纯文本，这里统一转成 400 + JSON 错误体。

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest};

use crate::errors::PortalError;

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!("Invalid query string on {}: {}", req.path(), err);
    PortalError::validation(format!("Invalid query parameters: {err}")).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!("Invalid JSON body on {}: {}", req.path(), err);
    PortalError::validation(format!("Invalid JSON body: {err}")).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    tracing::debug!("Invalid path parameter on {}: {}", req.path(), err);
    PortalError::validation(format!("Invalid path parameter: {err}")).into()
}
