use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{PortalError, Result};

/// 已经移动到最终位置、但还没有被数据库确认的上传文件
///
/// 覆盖已有文件时，旧文件先被挪到暂存目录作为备份：
/// `commit` 丢弃备份，`rollback` 删除新文件并把备份放回原处。
/// 未处理就被丢弃时按 `commit` 处理。
#[derive(Debug)]
pub struct PersistedUpload {
    destination: PathBuf,
    backup: Option<PathBuf>,
    settled: bool,
}

impl PersistedUpload {
    pub(super) fn new(destination: PathBuf, backup: Option<PathBuf>) -> Self {
        Self {
            destination,
            backup,
            settled: false,
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// 是否覆盖了一个已有文件
    pub fn replaced_existing(&self) -> bool {
        self.backup.is_some()
    }

    /// 确认新文件，删除旧文件的备份
    pub fn commit(mut self) -> Result<()> {
        self.settled = true;
        if let Some(backup) = self.backup.take() {
            remove_if_present(&backup).map_err(|e| {
                PortalError::storage(format!("删除备份文件 {} 失败: {e}", backup.display()))
            })?;
        }
        Ok(())
    }

    /// 撤销这次移动：删除新文件，有备份时恢复旧文件
    pub fn rollback(mut self) -> Result<()> {
        self.settled = true;
        remove_if_present(&self.destination).map_err(|e| {
            PortalError::storage(format!(
                "删除文件 {} 失败: {e}",
                self.destination.display()
            ))
        })?;

        if let Some(backup) = self.backup.take() {
            fs::rename(&backup, &self.destination).map_err(|e| {
                PortalError::storage(format!(
                    "恢复文件 {} 失败（备份仍在 {}）: {e}",
                    self.destination.display(),
                    backup.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Drop for PersistedUpload {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Some(backup) = self.backup.take()
            && let Err(e) = remove_if_present(&backup)
        {
            tracing::warn!("清理备份文件 {} 失败: {}", backup.display(), e);
        }
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
