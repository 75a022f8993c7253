#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use assignment_portal::config::DatabaseConfig;
use assignment_portal::entity::prelude::{StaffActiveModel, UserActiveModel};
use assignment_portal::storage::Storage;
use assignment_portal::storage::sea_orm_storage::SeaOrmStorage;
use assignment_portal::uploads::{StagedUpload, UploadStore};
use sea_orm::{ActiveModelTrait, Set};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

/// 一套独立的 SQLite 数据库 + 作业目录
pub struct TestEnv {
    pub base: PathBuf,
    pub db: SeaOrmStorage,
    pub uploads: UploadStore,
}

impl TestEnv {
    pub async fn new(prefix: &str) -> Self {
        let base = temp_dir(prefix);
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", base.join("portal.db").display()),
            pool_size: 4,
            timeout: 5,
        };
        let db = SeaOrmStorage::connect(&config)
            .await
            .expect("connect sqlite");
        let uploads = UploadStore::new(
            base.join("assignments"),
            base.join("staging"),
            1024 * 1024,
            vec![".pdf".into(), ".mp4".into()],
        );
        uploads.ensure_dirs().expect("upload dirs");

        Self { base, db, uploads }
    }

    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::new(self.db.clone())
    }

    pub async fn seed_student(&self, id: i64, usn: &str, name: &str, email: &str, batch: &str) {
        UserActiveModel {
            id: Set(id),
            usn: Set(usn.to_string()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password: Set("secret".to_string()),
            semester: Set(Some("5".to_string())),
            branch: Set(Some("CSE".to_string())),
            batch: Set(batch.to_string()),
        }
        .insert(self.db.connection())
        .await
        .expect("insert student");
    }

    pub async fn seed_staff(&self, name: &str, email: &str, password: &str, subjects: &str) {
        StaffActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password: Set(password.to_string()),
            subjects: Set(subjects.to_string()),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("insert staff");
    }

    /// 模拟一次已经写入暂存目录的上传
    pub fn staged(&self, original_name: &str, data: &[u8]) -> StagedUpload {
        let mut staged = self.uploads.stage(original_name).expect("stage upload");
        staged.write_chunk(data).expect("write staged chunk");
        staged
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.base.join("staging")
    }

    pub fn stored(&self, subject: &str, file: &str) -> PathBuf {
        self.uploads.root().join(subject).join(file)
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

pub fn count_files(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(Result::ok).count(),
        Err(_) => 0,
    }
}
