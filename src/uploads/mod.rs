//! 作业文件存储
//!
//! 目录布局：`<root>/<subject>/<usn>.<assignment_number><ext>`。
//! 上传先写入暂存目录，校验通过后通过一次 rename 移动到最终位置。

mod persisted;
mod staged;

pub use persisted::PersistedUpload;
pub use staged::StagedUpload;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::errors::{PortalError, Result};
use crate::utils::validate_path_segment;

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    staging: PathBuf,
    max_size: usize,
    allowed_extensions: Vec<String>,
}

impl UploadStore {
    pub fn new(
        root: impl Into<PathBuf>,
        staging: impl Into<PathBuf>,
        max_size: usize,
        allowed_extensions: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            staging: staging.into(),
            max_size,
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(
            &config.dir,
            &config.staging_dir,
            config.max_size,
            config.allowed_extensions.clone(),
        )
    }

    /// 确保根目录和暂存目录存在
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.root, &self.staging] {
            fs::create_dir_all(dir).map_err(|e| {
                PortalError::storage(format!("创建目录 {} 失败: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// 提取小写扩展名（含点号），不在白名单内返回 None
    pub fn allowed_extension(&self, original_name: &str) -> Option<String> {
        let extension = file_extension(original_name)?;
        self.allowed_extensions
            .iter()
            .any(|allowed| *allowed == extension)
            .then_some(extension)
    }

    /// 科目目录，科目名必须是安全的单个路径段
    pub fn subject_dir(&self, subject: &str) -> Result<PathBuf> {
        validate_path_segment(subject)
            .map_err(|reason| PortalError::validation(format!("Invalid subject: {reason}")))?;
        Ok(self.root.join(subject))
    }

    /// 存储文件的完整路径
    pub fn stored_path(&self, subject: &str, file: &str) -> Result<PathBuf> {
        let dir = self.subject_dir(subject)?;
        validate_path_segment(file)
            .map_err(|reason| PortalError::validation(format!("Invalid file name: {reason}")))?;
        Ok(dir.join(file))
    }

    /// 在暂存目录创建一个新的上传文件
    pub fn stage(&self, original_name: &str) -> Result<StagedUpload> {
        fs::create_dir_all(&self.staging)
            .map_err(|e| PortalError::storage(format!("创建暂存目录失败: {e}")))?;

        let staged_name = format!("{}-{}.part", chrono::Utc::now().timestamp(), Uuid::new_v4());
        StagedUpload::create(
            self.staging.join(staged_name),
            original_name,
            self.max_size,
        )
    }

    /// 把暂存文件移动到 `<root>/<subject>/<stored_name>`
    ///
    /// 目标已存在时，旧文件先被挪进暂存目录作为备份，由返回的
    /// `PersistedUpload` 决定丢弃还是恢复。失败时暂存文件随 `staged` 一起被清理，
    /// 已挪走的旧文件会被放回原处。
    pub fn persist(
        &self,
        mut staged: StagedUpload,
        subject: &str,
        stored_name: &str,
    ) -> Result<PersistedUpload> {
        let destination = self.stored_path(subject, stored_name)?;
        let dir = self.subject_dir(subject)?;

        fs::create_dir_all(&dir)
            .map_err(|e| PortalError::storage(format!("创建科目目录失败: {e}")))?;

        staged.finish()?;

        let backup = self.back_up_existing(&destination)?;
        if let Err(e) = fs::rename(staged.path(), &destination) {
            if let Some(backup) = &backup
                && let Err(restore_err) = fs::rename(backup, &destination)
            {
                tracing::error!(
                    "恢复文件 {} 失败（备份仍在 {}）: {}",
                    destination.display(),
                    backup.display(),
                    restore_err
                );
            }
            return Err(PortalError::storage(format!("移动上传文件失败: {e}")));
        }
        staged.mark_persisted();

        Ok(PersistedUpload::new(destination, backup))
    }

    /// 目标是普通文件时把它挪到暂存目录，返回备份路径
    fn back_up_existing(&self, destination: &Path) -> Result<Option<PathBuf>> {
        match fs::symlink_metadata(destination) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PortalError::storage(format!(
                    "读取文件 {} 失败: {e}",
                    destination.display()
                )));
            }
        }

        fs::create_dir_all(&self.staging)
            .map_err(|e| PortalError::storage(format!("创建暂存目录失败: {e}")))?;
        let backup = self.staging.join(format!(
            "{}-{}.bak",
            chrono::Utc::now().timestamp(),
            Uuid::new_v4()
        ));
        fs::rename(destination, &backup).map_err(|e| {
            PortalError::storage(format!("备份文件 {} 失败: {e}", destination.display()))
        })?;
        Ok(Some(backup))
    }

    /// 删除存储文件，文件本来就不存在时返回 `Ok(false)`
    pub fn remove(&self, subject: &str, file: &str) -> Result<bool> {
        let path = self.stored_path(subject, file)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PortalError::storage(format!(
                "删除文件 {} 失败: {e}",
                path.display()
            ))),
        }
    }

    /// 读取存储文件，不存在时返回 `Ok(None)`
    pub fn read(&self, subject: &str, file: &str) -> Result<Option<Vec<u8>>> {
        let path = self.stored_path(subject, file)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortalError::storage(format!(
                "读取文件 {} 失败: {e}",
                path.display()
            ))),
        }
    }
}

/// 小写扩展名（含点号）
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// 规范存储文件名：`<usn>.<assignment_number><ext>`
///
/// 同一学生、同一作业编号、同一扩展名永远得到同一个名字，重复提交会覆盖旧文件。
pub fn stored_file_name(usn: &str, assignment_number: &str, extension: &str) -> String {
    format!("{usn}.{assignment_number}{extension}")
}
