use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{PortalError, Result};

/// 暂存中的上传文件
///
/// 在被 `UploadStore::persist` 移走之前一旦被丢弃，暂存文件就会被删除，
/// 所以任何失败分支都不会留下孤立的临时文件。
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
    original_name: String,
    writer: Option<File>,
    size: usize,
    max_size: usize,
    persisted: bool,
}

impl StagedUpload {
    pub(super) fn create(path: PathBuf, original_name: &str, max_size: usize) -> Result<Self> {
        let writer = File::create(&path)
            .map_err(|e| PortalError::storage(format!("创建暂存文件失败: {e}")))?;

        Ok(Self {
            path,
            original_name: original_name.to_string(),
            writer: Some(writer),
            size: 0,
            max_size,
            persisted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 客户端提供的原始文件名
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 追加一段数据，超过大小限制时返回 Validation 错误
    pub fn write_chunk(&mut self, data: &[u8]) -> Result<()> {
        self.size += data.len();
        if self.size > self.max_size {
            return Err(PortalError::validation(format!(
                "File size exceeds the limit of {} bytes",
                self.max_size
            )));
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| PortalError::storage("暂存文件已关闭"))?;
        writer
            .write_all(data)
            .map_err(|e| PortalError::storage(format!("写入暂存文件失败: {e}")))
    }

    /// 刷新并关闭写入句柄
    pub fn finish(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| PortalError::storage(format!("写入暂存文件失败: {e}")))?;
        }
        Ok(())
    }

    pub(super) fn mark_persisted(&mut self) {
        self.persisted = true;
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        self.writer.take();
        if !self.persisted
            && let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!("清理暂存文件 {} 失败: {}", self.path.display(), e);
        }
    }
}
