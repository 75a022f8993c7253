use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::storage::Storage;
use crate::uploads::UploadStore;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadStore,
}

/// 准备上传目录（作业根目录 + 暂存目录）
fn prepare_uploads(config: &AppConfig) -> Result<UploadStore> {
    let uploads = UploadStore::from_config(&config.upload);
    uploads.ensure_dirs()?;
    debug!(
        "Upload root: {}, max size: {} bytes",
        uploads.root().display(),
        uploads.max_size()
    );
    Ok(uploads)
}

/// 准备服务器启动的上下文
/// 包括存储连接池、数据库迁移和上传目录
pub async fn prepare_server_startup() -> Result<StartupContext> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| PortalError::database_config("Failed to install rustls crypto provider"))?;

    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let uploads = prepare_uploads(config)?;
    warn!("Assignment storage ready at {}", uploads.root().display());

    Ok(StartupContext { storage, uploads })
}
