use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，没有任何配置文件也能启动
            .set_default("app.system_name", "Assignment Portal")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 8)?
            .set_default("server.timeouts.client_request", 60000)?
            .set_default("server.timeouts.client_disconnect", 5000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("server.limits.max_payload_size", 64 * 1024 * 1024)?
            .set_default("database.url", "portal.db")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cors.max_age", 3600)?
            .set_default("upload.dir", "assignments")?
            .set_default("upload.staging_dir", "staging")?
            .set_default("upload.max_size", 200 * 1024 * 1024)?
            .set_default("upload.allowed_extensions", vec![".pdf", ".mp4"])?
            .set_default("frontend.dir", "frontend/build")?
            // 然后加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        let database_url = std::env::var("DATABASE_URL").ok().or_else(|| {
            compose_mysql_url(
                std::env::var("DB_HOST").ok().as_deref(),
                std::env::var("DB_USER").ok().as_deref(),
                std::env::var("DB_PASSWORD").ok().as_deref(),
                std::env::var("DB_NAME").ok().as_deref(),
            )
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .or_else(|| std::env::var("PORT").ok());

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", port)?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", database_url)?
            .set_override_option("upload.dir", std::env::var("ASSIGNMENTS_DIR").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

/// 兼容旧部署方式：DB_HOST / DB_USER / DB_PASSWORD / DB_NAME 拼出 MySQL 连接串
///
/// 只有设置了 DB_HOST 才会生效，其余字段沿用旧默认值。
fn compose_mysql_url(
    host: Option<&str>,
    user: Option<&str>,
    password: Option<&str>,
    name: Option<&str>,
) -> Option<String> {
    let host = host.filter(|h| !h.is_empty())?;
    let user = user.unwrap_or("root");
    let name = name.unwrap_or("details");

    let credentials = match password {
        Some(pwd) if !pwd.is_empty() => {
            format!("{}:{}", urlencoding::encode(user), urlencoding::encode(pwd))
        }
        _ => urlencoding::encode(user).into_owned(),
    };

    Some(format!("mysql://{credentials}@{host}/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_requires_host() {
        assert_eq!(compose_mysql_url(None, Some("root"), None, None), None);
        assert_eq!(compose_mysql_url(Some(""), None, None, None), None);
    }

    #[test]
    fn test_compose_with_defaults() {
        assert_eq!(
            compose_mysql_url(Some("localhost"), None, None, None).as_deref(),
            Some("mysql://root@localhost/details")
        );
    }

    #[test]
    fn test_compose_encodes_password() {
        assert_eq!(
            compose_mysql_url(Some("db"), Some("portal"), Some("p@ss:word"), Some("school"))
                .as_deref(),
            Some("mysql://portal:p%40ss%3Aword@db/school")
        );
        assert_eq!(
            compose_mysql_url(Some("db"), Some("a b/c"), Some("x#y?z"), None).as_deref(),
            Some("mysql://a%20b%2Fc:x%23y%3Fz@db/details")
        );
    }

    #[test]
    fn test_defaults_load_without_files() {
        let config = AppConfig::load().unwrap();
        assert!(
            config
                .upload
                .allowed_extensions
                .iter()
                .any(|ext| ext == ".pdf")
        );
        assert!(config.server.workers >= 1);
    }

    #[test]
    fn test_environment_flags() {
        let mut config = AppConfig::load().unwrap();
        config.app.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.app.environment = "development".to_string();
        assert!(!config.is_production());
        assert!(config.is_development());
    }
}
