//! Student seeding.
//!
//! Names come from `fake`, records are generated in parallel with `rayon`,
//! and every seeded account shares one bcrypt digest so seeding a few
//! hundred students does not cost a few hundred hash computations.

use std::time::Instant;

use anyhow::Context;
use campus_core::{AppError, hash_password, normalize_email};
use campus_db::{RepositoryError, StudentRepository};
use campus_models::NewStudent;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;

const DEPARTMENTS: &[&str] = &["CS", "Math", "Physics", "Biology", "History", "Economics"];

/// Outcome of a seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    /// Generated emails that were already taken.
    pub skipped: usize,
}

fn email_part(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Generates `count` students sharing `password_digest`.
///
/// Emails embed the index, so a single batch never collides with itself.
pub fn generate_students(count: usize, password_digest: &str) -> Vec<NewStudent> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = normalize_email(&format!(
                "{}.{}+student{}@example.com",
                email_part(&first_name),
                email_part(&last_name),
                idx
            ));

            NewStudent {
                name: format!("{} {}", first_name, last_name),
                email,
                password_digest: password_digest.to_string(),
                department: Some(DEPARTMENTS[idx % DEPARTMENTS.len()].to_string()),
                year: Some((idx % 4) as i32 + 1),
            }
        })
        .collect()
}

/// Hashes `password` once and inserts `count` fake students.
pub async fn seed_students(
    students: &dyn StudentRepository,
    count: usize,
    password: &str,
    cost: u32,
) -> anyhow::Result<SeedReport> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let digest = hash_password(password, cost)
        .map_err(|e: AppError| e.error)
        .context("failed to hash seed password")?;

    let batch = generate_students(count, &digest);
    let mut report = SeedReport::default();

    for student in batch {
        match students.create(student).await {
            Ok(_) => report.created += 1,
            Err(RepositoryError::DuplicateEmail) => report.skipped += 1,
            Err(e) => return Err(e).context("failed to insert seeded student"),
        }
    }

    println!(
        "✅ Seeded {} students ({} skipped) in {:.2?}",
        report.created,
        report.skipped,
        start_time.elapsed()
    );

    Ok(report)
}

/// Removes every student record.
pub async fn clear_students(students: &dyn StudentRepository) -> anyhow::Result<u64> {
    let removed = students
        .delete_all()
        .await
        .context("failed to clear students")?;

    println!("🗑️  Removed {} students", removed);
    Ok(removed)
}
