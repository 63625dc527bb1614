//! # Campus CLI
//!
//! Operator tooling for the student store: creating single accounts,
//! seeding fake students for development, and wiping the table.
//!
//! ```ignore
//! use campus_cli::seeder::seed_students;
//!
//! let report = seed_students(&repo, 50, "password123", 10).await?;
//! println!("{} created", report.created);
//! ```

pub mod seeder;
