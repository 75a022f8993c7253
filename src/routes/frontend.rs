//! 前端静态资源路由
//!
//! 从 `frontend.dir` 读取构建好的 SPA：
//! - 找到文件直接返回，否则回退到 index.html
//! - API 前缀下的路径不回退，直接 404

use actix_web::{HttpRequest, HttpResponse, web};
use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};

/// 这些前缀属于后端接口，不能被 SPA 接管
const RESERVED_PREFIXES: &[&str] = &[
    "api",
    "uploads",
    "assignments",
    "users",
    "subjects",
    "deadlines",
    "test",
];

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 带 hash 的静态资源可以长期缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    matches!(
        ext,
        "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp"
    )
}

fn is_reserved(path: &str) -> bool {
    let first = path.split('/').next().unwrap_or_default();
    RESERVED_PREFIXES.contains(&first)
}

/// 请求路径映射到前端目录内的文件，拒绝 `..` 等越界路径
fn resolve_asset(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    let candidate = root.join(relative);
    candidate.is_file().then_some(candidate)
}

fn file_response(path: &Path, name: &str) -> Result<HttpResponse> {
    let data = std::fs::read(path)
        .map_err(|e| PortalError::storage(format!("读取前端文件失败: {e}")))?;

    let mut response = HttpResponse::Ok();
    response.content_type(get_mime_type(name));
    if should_cache(name) {
        response.insert_header(("Cache-Control", "public, max-age=31536000, immutable"));
    } else {
        response.insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"));
    }
    Ok(response.body(data))
}

/// 前端资源请求处理
pub async fn serve_frontend(req: HttpRequest) -> Result<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');
    let root = Path::new(&AppConfig::get().frontend.dir);

    if !path.is_empty()
        && let Some(file) = resolve_asset(root, path)
    {
        return file_response(&file, path);
    }

    if is_reserved(path) {
        return Err(PortalError::not_found(format!("No route for /{path}")));
    }

    // SPA fallback
    let index = root.join("index.html");
    if index.is_file() {
        return file_response(&index, "index.html");
    }

    Err(PortalError::not_found("Frontend has not been built"))
}

/// 配置前端路由
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    // 所有未匹配的 GET 交给前端处理
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mime_type() {
        assert_eq!(get_mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            get_mime_type("static/js/main.3f2a.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(get_mime_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(get_mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_should_cache() {
        assert!(should_cache("static/js/main.js"));
        assert!(should_cache("logo.png"));
        assert!(!should_cache("index.html"));
        assert!(!should_cache("manifest.json"));
    }

    #[test]
    fn test_reserved_prefixes() {
        assert!(is_reserved("uploads/AI/x.pdf"));
        assert!(is_reserved("assignments"));
        assert!(is_reserved("test"));
        assert!(!is_reserved("login"));
        assert!(!is_reserved(""));
        assert!(!is_reserved("testing"));
    }

    #[test]
    fn test_resolve_asset_rejects_traversal() {
        let root = std::env::temp_dir().join(format!("portal-frontend-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(root.join("static")).unwrap();
        std::fs::write(root.join("static/app.js"), "console.log(1)").unwrap();

        assert!(resolve_asset(&root, "static/app.js").is_some());
        assert!(resolve_asset(&root, "static/missing.js").is_none());
        assert!(resolve_asset(&root, "../etc/passwd").is_none());
        assert!(resolve_asset(&root, "static").is_none());
    }
}
