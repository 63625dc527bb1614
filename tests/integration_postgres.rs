//! Runs against a real Postgres. Needs `DATABASE_URL`; run with
//! `cargo test --test integration_postgres -- --ignored`.

use campus::campus_db::{PgStudentRepository, RepositoryError, StudentRepository};
use campus::campus_models::{NewStudent, UpdateStudentDto};
use sqlx::PgPool;
use uuid::Uuid;

fn new_student(email: &str) -> NewStudent {
    NewStudent {
        name: "Alice".to_string(),
        email: email.to_string(),
        password_digest: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        department: Some("CS".to_string()),
        year: Some(2),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgStudentRepository::new(pool);

    let created = repo.create(new_student("alice@x.com")).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));

    let credentials = repo.find_credentials("alice@x.com").await.unwrap().unwrap();
    assert_eq!(credentials.id, created.id);
    assert!(credentials.password_digest.starts_with("$2b$"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_unique_index_is_case_insensitive(pool: PgPool) {
    let repo = PgStudentRepository::new(pool);
    repo.create(new_student("alice@x.com")).await.unwrap();

    let err = repo.create(new_student("ALICE@x.com")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateEmail));
    assert!(repo.email_exists("Alice@X.com").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_and_delete(pool: PgPool) {
    let repo = PgStudentRepository::new(pool);
    let created = repo.create(new_student("alice@x.com")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateStudentDto {
                name: "Alice B".to_string(),
                department: None,
                year: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.department, None);
    assert_eq!(updated.email, "alice@x.com");

    assert!(
        repo.update(
            Uuid::new_v4(),
            UpdateStudentDto {
                name: "Ghost".to_string(),
                department: None,
                year: None,
            },
        )
        .await
        .unwrap()
        .is_none()
    );

    assert_eq!(repo.delete(created.id).await.unwrap(), 1);
    assert_eq!(repo.delete(created.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_list_order_and_clear(pool: PgPool) {
    let repo = PgStudentRepository::new(pool);
    let first = repo.create(new_student("a@x.com")).await.unwrap();
    let second = repo.create(new_student("b@x.com")).await.unwrap();

    let ids: Vec<Uuid> = repo.list().await.unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id) && ids.contains(&second.id));

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert!(repo.list().await.unwrap().is_empty());
    assert!(repo.now().await.is_ok());
}
