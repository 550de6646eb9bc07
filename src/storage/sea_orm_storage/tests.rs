use super::{SeaOrmStorage, statement_echo_enabled};
use crate::config::DatabaseConfig;
use crate::errors::RosterError;
use crate::models::{
    classes::requests::{CreateClassRequest, UpdateClassRequest},
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::Storage;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};
use tracing::level_filters::LevelFilter;

async fn open_store() -> (TempDir, PathBuf, SeaOrmStorage) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("database.sqlite");
    let storage = SeaOrmStorage::open(&path, &DatabaseConfig::default())
        .await
        .unwrap();
    (dir, path, storage)
}

fn class_req(id: &str, grade_id: &str) -> CreateClassRequest {
    CreateClassRequest {
        id: id.to_string(),
        grade_id: grade_id.to_string(),
    }
}

fn student_req(id: &str, grade_id: &str, class_id: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        id: id.to_string(),
        grade_id: grade_id.to_string(),
        class_id: class_id.to_string(),
        name: "张三".to_string(),
        pinyin: "Zhang San / Zhang3 San1".to_string(),
        gender: "男".to_string(),
        birthday: Some("2012-03-04".to_string()),
        eduid: None,
    }
}

#[tokio::test]
async fn test_open_creates_file_and_is_idempotent() {
    let (_dir, path, storage) = open_store().await;
    assert!(path.exists());

    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();

    let reopened = SeaOrmStorage::open(&path, &DatabaseConfig::default())
        .await
        .unwrap();
    assert_eq!(reopened.list_grades().await.unwrap().len(), 1);
    assert_eq!(
        reopened.list_classes_by_grade("G1").await.unwrap()[0].id,
        "C1"
    );
}

#[tokio::test]
async fn test_open_missing_parent_dir_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("database.sqlite");

    let err = SeaOrmStorage::open(&path, &DatabaseConfig::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RosterError::StoreUnavailable(_)), "{err}");
    assert!(!path.exists());
}

#[tokio::test]
async fn test_open_non_database_file_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("database.sqlite");
    std::fs::write(&path, "this is not a sqlite database\n".repeat(64)).unwrap();

    let err = SeaOrmStorage::open(&path, &DatabaseConfig::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RosterError::CorruptStore(_)), "{err}");
}

#[tokio::test]
async fn test_open_damaged_pages_is_corrupt() {
    let (_dir, path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.db.close().await.unwrap();
    for suffix in ["sqlite-wal", "sqlite-shm"] {
        let _ = std::fs::remove_file(path.with_extension(suffix));
    }

    // 保留 100 字节文件头，破坏其后的页内容
    let mut bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 100);
    bytes[100..].fill(0xAB);
    std::fs::write(&path, bytes).unwrap();

    let err = SeaOrmStorage::open(&path, &DatabaseConfig::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RosterError::CorruptStore(_)), "{err}");
}

#[test]
fn test_statement_echo_follows_log_level() {
    assert!(!statement_echo_enabled(LevelFilter::OFF));
    assert!(!statement_echo_enabled(LevelFilter::WARN));
    assert!(!statement_echo_enabled(LevelFilter::INFO));
    assert!(statement_echo_enabled(LevelFilter::DEBUG));
    assert!(statement_echo_enabled(LevelFilter::TRACE));
}

#[tokio::test]
async fn test_class_with_unknown_grade_is_rejected() {
    let (_dir, _path, storage) = open_store().await;

    let err = storage
        .create_class(class_req("C1", "G_missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::ReferentialIntegrity(_)), "{err}");
    assert!(storage.get_class_by_id("C1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_student_with_unknown_class_is_rejected() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();

    let err = storage
        .create_student(student_req("S1", "G1", "C_missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::ReferentialIntegrity(_)), "{err}");
}

#[tokio::test]
async fn test_duplicate_primary_key_is_rejected() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();

    let err = storage.create_grade("G1").await.unwrap_err();
    assert!(matches!(err, RosterError::UniquenessViolation(_)), "{err}");
}

#[tokio::test]
async fn test_classes_are_listed_by_id() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    for id in ["1", "3", "2"] {
        storage.create_class(class_req(id, "G1")).await.unwrap();
    }

    let ids: Vec<_> = storage
        .list_classes_by_grade("G1")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_grade_roster_round_trip() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    storage
        .create_student(student_req("S1", "G1", "C1"))
        .await
        .unwrap();

    let roster = storage.get_grade_roster("G1").await.unwrap().unwrap();
    assert_eq!(roster.grade.id, "G1");
    assert_eq!(roster.classes[0].class.id, "C1");

    let student = &roster.classes[0].students[0];
    assert_eq!(student.id, "S1");
    assert_eq!(student.pinyin_full(), vec!["Zhang San", "Zhang3 San1"]);
    assert_eq!(student.pinyin_first().unwrap(), vec!["ZS", "ZS"]);
    assert_eq!(student.birthday.as_deref(), Some("2012-03-04"));
    assert_eq!(student.eduid, None);

    assert!(storage.get_grade_roster("G9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_students_are_listed_by_id() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    for id in ["S3", "S1", "S2"] {
        storage
            .create_student(student_req(id, "G1", "C1"))
            .await
            .unwrap();
    }

    let by_class: Vec<_> = storage
        .list_students_by_class("C1")
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(by_class, vec!["S1", "S2", "S3"]);

    let by_grade = storage.list_students_by_grade("G1").await.unwrap();
    assert_eq!(by_grade.len(), 3);
    assert_eq!(by_grade[0].id, "S1");
}

#[tokio::test]
async fn test_parent_references() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    storage
        .create_student(student_req("S1", "G1", "C1"))
        .await
        .unwrap();

    let grade = storage.get_class_grade("C1").await.unwrap().unwrap();
    assert_eq!(grade.id, "G1");
    let class = storage.get_student_class("S1").await.unwrap().unwrap();
    assert_eq!(class.id, "C1");

    assert!(storage.get_class_grade("C9").await.unwrap().is_none());
    assert!(storage.get_student_class("S9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_student() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    storage.create_class(class_req("C2", "G1")).await.unwrap();
    storage
        .create_student(student_req("S1", "G1", "C1"))
        .await
        .unwrap();

    let unchanged = storage
        .update_student("S1", UpdateStudentRequest::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.class_id, "C1");

    let updated = storage
        .update_student(
            "S1",
            UpdateStudentRequest {
                class_id: Some("C2".to_string()),
                pinyin: Some("Li Si".to_string()),
                birthday: Some(None),
                eduid: Some(Some("12345678".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.class_id, "C2");
    assert_eq!(updated.pinyin_first().unwrap(), vec!["LS"]);
    assert_eq!(updated.birthday, None);
    assert_eq!(updated.eduid.as_deref(), Some("12345678"));
    assert_eq!(updated.name, "张三");

    let err = storage
        .update_student(
            "S1",
            UpdateStudentRequest {
                class_id: Some("C_missing".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::ReferentialIntegrity(_)), "{err}");

    assert!(
        storage
            .update_student("S9", UpdateStudentRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_update_class_grade() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_grade("G2").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();

    let moved = storage
        .update_class(
            "C1",
            UpdateClassRequest {
                grade_id: Some("G2".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.grade_id, "G2");
    assert!(storage.list_classes_by_grade("G1").await.unwrap().is_empty());

    assert!(
        storage
            .update_class("C9", UpdateClassRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_respects_references() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    storage
        .create_student(student_req("S1", "G1", "C1"))
        .await
        .unwrap();

    let err = storage.delete_grade("G1").await.unwrap_err();
    assert!(matches!(err, RosterError::ReferentialIntegrity(_)), "{err}");

    assert!(storage.delete_student("S1").await.unwrap());
    assert!(!storage.delete_student("S1").await.unwrap());
    assert!(storage.delete_class("C1").await.unwrap());
    assert!(storage.delete_grade("G1").await.unwrap());
    assert!(storage.list_grades().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_grade_mismatch_audit() {
    let (_dir, _path, storage) = open_store().await;
    storage.create_grade("G1").await.unwrap();
    storage.create_grade("G2").await.unwrap();
    storage.create_class(class_req("C1", "G1")).await.unwrap();
    storage
        .create_student(student_req("S1", "G1", "C1"))
        .await
        .unwrap();
    // 写入时不校验一致性
    storage
        .create_student(student_req("S2", "G2", "C1"))
        .await
        .unwrap();

    let mismatched = storage.list_grade_mismatched_students().await.unwrap();
    assert_eq!(mismatched.len(), 1);
    assert_eq!(mismatched[0].id, "S2");
}
