mod common;

use assignment_portal::errors::{PortalError, Result};
use assignment_portal::models::assignments::{
    entities::{Assignment, AssignmentView},
    requests::NewAssignment,
};
use assignment_portal::models::deadlines::entities::Deadline;
use assignment_portal::models::staffs::entities::Staff;
use assignment_portal::models::users::entities::Student;
use assignment_portal::services::assignments::SubmissionForm;
use assignment_portal::services::assignments::submit::submit_assignment;
use assignment_portal::storage::Storage;
use common::{TestEnv, count_files};

fn form(user_id: &str, subject: &str, number: &str) -> SubmissionForm {
    SubmissionForm::new()
        .with_field("user_id", user_id)
        .with_field("subject", subject)
        .with_field("title", "Search algorithms")
        .with_field("description", "A* and friends")
        .with_field("category", "report")
        .with_field("assignment_number", number)
}

async fn env_with_student() -> TestEnv {
    let env = TestEnv::new("portal-submit").await;
    env.seed_student(7, "1AB20CS007", "Asha", "asha@example.com", "2020")
        .await;
    env
}

#[tokio::test]
async fn submission_is_stored_under_subject_with_canonical_name() {
    let env = env_with_student().await;
    let storage = env.storage();

    let staged = env.staged("report.PDF", b"%PDF-1.4 first");
    let submitted = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(staged),
    )
    .await
    .expect("submit");

    assert_eq!(submitted.file, "1AB20CS007.1.pdf");
    assert_eq!(submitted.file_path, "/uploads/AI/1AB20CS007.1.pdf");
    assert_eq!(submitted.subject, "AI");
    assert_eq!(submitted.assignment_number, "1");
    assert_eq!(
        std::fs::read(env.stored("AI", "1AB20CS007.1.pdf")).expect("stored file"),
        b"%PDF-1.4 first"
    );
    assert_eq!(count_files(&env.staging_dir()), 0);

    let rows = storage.list_assignments_by_user(7).await.expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, submitted.id);
    assert_eq!(rows[0].file, "1AB20CS007.1.pdf");
    assert_eq!(rows[0].title, "Search algorithms");
}

#[tokio::test]
async fn resubmission_overwrites_file_and_adds_second_row() {
    let env = env_with_student().await;
    let storage = env.storage();

    let first = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report.PDF", b"first")),
    )
    .await
    .expect("first submit");
    let second = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report-v2.pdf", b"second")),
    )
    .await
    .expect("second submit");

    assert_ne!(first.id, second.id);
    assert_eq!(first.file, second.file);
    assert_eq!(
        std::fs::read(env.stored("AI", "1AB20CS007.1.pdf")).expect("stored file"),
        b"second"
    );
    assert_eq!(count_files(&env.uploads.root().join("AI")), 1);

    let rows = storage.list_assignments_by_user(7).await.expect("list");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.file == "1AB20CS007.1.pdf"));
}

#[tokio::test]
async fn mp4_extension_is_accepted_case_insensitively() {
    let env = env_with_student().await;
    let storage = env.storage();

    let submitted = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "ML", "3").with_file(env.staged("demo.Mp4", b"\0\0\0\x18ftyp")),
    )
    .await
    .expect("submit");

    assert_eq!(submitted.file, "1AB20CS007.3.mp4");
    assert!(env.stored("ML", "1AB20CS007.3.mp4").exists());
}

#[tokio::test]
async fn unsupported_extension_leaves_no_row_and_no_staged_file() {
    let env = env_with_student().await;
    let storage = env.storage();

    for name in ["notes.docx", "script.exe", "README"] {
        let err = submit_assignment(
            storage.as_ref(),
            &env.uploads,
            form("7", "AI", "1").with_file(env.staged(name, b"data")),
        )
        .await
        .expect_err("extension must be rejected");

        assert_eq!(err.code(), "E005");
        assert_eq!(
            err.message(),
            "Invalid file type. Only PDF and MP4 are allowed."
        );
    }

    assert!(storage.list_assignments_by_user(7).await.unwrap().is_empty());
    assert_eq!(count_files(&env.staging_dir()), 0);
    assert_eq!(count_files(env.uploads.root()), 0);
}

#[tokio::test]
async fn unknown_user_is_rejected_without_writing() {
    let env = env_with_student().await;
    let storage = env.storage();

    let err = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("999", "AI", "1").with_file(env.staged("report.pdf", b"data")),
    )
    .await
    .expect_err("unknown user");

    assert_eq!(err.code(), "E006");
    assert_eq!(err.message(), "User not found");
    assert_eq!(count_files(env.uploads.root()), 0);
    assert_eq!(count_files(&env.staging_dir()), 0);
}

#[tokio::test]
async fn missing_file_and_bad_user_id_are_validation_errors() {
    let env = env_with_student().await;
    let storage = env.storage();

    let err = submit_assignment(storage.as_ref(), &env.uploads, form("7", "AI", "1"))
        .await
        .expect_err("no file");
    assert_eq!(err.code(), "E005");

    let err = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("seven", "AI", "1").with_file(env.staged("report.pdf", b"data")),
    )
    .await
    .expect_err("bad user id");
    assert_eq!(err.code(), "E005");
    assert_eq!(count_files(&env.staging_dir()), 0);
}

#[tokio::test]
async fn unsafe_subject_or_number_is_rejected_before_any_write() {
    let env = env_with_student().await;
    let storage = env.storage();

    let cases = [
        ("../etc", "1"),
        ("AI/ML", "1"),
        ("..\\windows", "1"),
        ("", "1"),
        ("AI", "../1"),
        ("AI", ""),
    ];

    for (subject, number) in cases {
        let err = submit_assignment(
            storage.as_ref(),
            &env.uploads,
            form("7", subject, number).with_file(env.staged("report.pdf", b"data")),
        )
        .await
        .expect_err("unsafe path segment");
        assert_eq!(err.code(), "E005", "subject={subject:?} number={number:?}");
    }

    assert_eq!(count_files(env.uploads.root()), 0);
    assert_eq!(count_files(&env.staging_dir()), 0);
    assert!(!env.base.join("etc").exists());
    assert!(storage.list_assignments_by_user(7).await.unwrap().is_empty());
}

/// 写入记录总是失败的存储，用来验证补偿删除
struct FailingInsert(std::sync::Arc<dyn Storage>);

#[async_trait::async_trait]
impl Storage for FailingInsert {
    async fn get_student_by_credentials(&self, email: &str, password: &str) -> Result<Option<Student>> {
        self.0.get_student_by_credentials(email, password).await
    }

    async fn get_staff_by_credentials(&self, email: &str, password: &str) -> Result<Option<Staff>> {
        self.0.get_staff_by_credentials(email, password).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.0.get_student_by_id(id).await
    }

    async fn get_staff_by_name(&self, name: &str) -> Result<Option<Staff>> {
        self.0.get_staff_by_name(name).await
    }

    async fn create_assignment(&self, _assignment: NewAssignment) -> Result<Assignment> {
        Err(PortalError::database_operation("disk full"))
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.0.get_assignment_by_id(id).await
    }

    async fn list_assignments_by_filter(
        &self,
        subject: &str,
        batch: &str,
        assignment_number: &str,
    ) -> Result<Vec<AssignmentView>> {
        self.0
            .list_assignments_by_filter(subject, batch, assignment_number)
            .await
    }

    async fn list_assignments_by_user(&self, user_id: i64) -> Result<Vec<Assignment>> {
        self.0.list_assignments_by_user(user_id).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.0.delete_assignment(id).await
    }

    async fn upsert_deadline(
        &self,
        subject: &str,
        batch: &str,
        deadline: chrono::NaiveDate,
    ) -> Result<Deadline> {
        self.0.upsert_deadline(subject, batch, deadline).await
    }

    async fn list_deadlines(&self) -> Result<Vec<Deadline>> {
        self.0.list_deadlines().await
    }
}

#[tokio::test]
async fn failed_insert_removes_the_moved_file() {
    let env = env_with_student().await;
    let storage = FailingInsert(env.storage());

    let err = submit_assignment(
        &storage,
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report.pdf", b"data")),
    )
    .await
    .expect_err("insert fails");

    assert_eq!(err.code(), "E003");
    assert!(!env.stored("AI", "1AB20CS007.1.pdf").exists());
    assert_eq!(count_files(&env.staging_dir()), 0);
    assert!(env.storage().list_assignments_by_user(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_resubmission_keeps_previous_file() {
    let env = env_with_student().await;

    let first = submit_assignment(
        env.storage().as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report.pdf", b"first")),
    )
    .await
    .expect("first submit");

    let failing = FailingInsert(env.storage());
    let err = submit_assignment(
        &failing,
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report-v2.pdf", b"second")),
    )
    .await
    .expect_err("insert fails");
    assert_eq!(err.code(), "E003");

    let rows = env.storage().list_assignments_by_user(7).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, first.id);
    assert_eq!(
        std::fs::read(env.stored("AI", &rows[0].file)).expect("previous file"),
        b"first"
    );
    assert_eq!(count_files(&env.uploads.root().join("AI")), 1);
    assert_eq!(count_files(&env.staging_dir()), 0);
}

#[tokio::test]
async fn unwritable_subject_dir_is_storage_error_without_row() {
    let env = env_with_student().await;
    let storage = env.storage();

    // 科目目录的位置被一个普通文件占据
    std::fs::write(env.uploads.root().join("AI"), b"not a dir").expect("blocking file");

    let err = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report.pdf", b"data")),
    )
    .await
    .expect_err("subject dir cannot be created");

    assert_eq!(err.code(), "E004");
    assert_eq!(err.http_status().as_u16(), 500);
    assert!(storage.list_assignments_by_user(7).await.unwrap().is_empty());
    assert_eq!(count_files(&env.staging_dir()), 0);
}

#[tokio::test]
async fn failed_move_is_storage_error_without_row() {
    let env = env_with_student().await;
    let storage = env.storage();

    // 目标文件名被一个非空目录占据，rename 失败
    let blocked = env.stored("AI", "1AB20CS007.1.pdf");
    std::fs::create_dir_all(blocked.join("inner")).expect("blocking dir");

    let err = submit_assignment(
        storage.as_ref(),
        &env.uploads,
        form("7", "AI", "1").with_file(env.staged("report.pdf", b"data")),
    )
    .await
    .expect_err("rename fails");

    assert_eq!(err.code(), "E004");
    assert!(blocked.join("inner").is_dir());
    assert!(storage.list_assignments_by_user(7).await.unwrap().is_empty());
    assert_eq!(count_files(&env.staging_dir()), 0);
}
