use anyhow::{Context, bail};
use campus_cli::seeder::{clear_students, seed_students};
use campus_config::{DatabaseConfig, PasswordConfig};
use campus_core::{hash_password, normalize_email};
use campus_db::{
    PgStudentRepository, RepositoryError, StudentRepository, init_db_pool, run_migrations,
};
use campus_models::{NewStudent, SignupRequest};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;
use validator::Validate;

#[derive(Parser)]
#[command(name = "campus-cli")]
#[command(about = "Smart Campus CLI - Administrative tools for the student store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Create a single student account
    CreateStudent {
        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Department
        #[arg(short = 'd', long)]
        department: Option<String>,

        /// Year of study
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },
    /// Seed the store with fake students
    Seed {
        /// Number of students to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,

        /// Password shared by every seeded account
        #[arg(long, default_value = "password123")]
        password: String,
    },
    /// Delete every student
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
        }
        Commands::CreateStudent {
            name,
            email,
            password,
            department,
            year,
        } => {
            let repo = PgStudentRepository::new(pool);
            handle_create_student(&repo, name, email, password, department, year).await?;
        }
        Commands::Seed { count, password } => {
            let cost = PasswordConfig::from_env()?.cost;
            let repo = PgStudentRepository::new(pool);
            seed_students(&repo, count, &password, cost).await?;
        }
        Commands::Clear { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete every student record?")
                    .default(false)
                    .interact()?;

            if confirmed {
                clear_students(&PgStudentRepository::new(pool)).await?;
            } else {
                println!("Aborted");
            }
        }
    }

    Ok(())
}

async fn handle_create_student(
    repo: &dyn StudentRepository,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    department: Option<String>,
    year: Option<i32>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let request = SignupRequest {
        name,
        email: email.trim().to_string(),
        password,
        department,
        year,
    };
    request.validate()?;

    let cost = PasswordConfig::from_env()?.cost;
    let password_digest = hash_password(&request.password, cost).map_err(|e| e.error)?;

    let student = repo
        .create(NewStudent {
            name: request.name,
            email: normalize_email(&request.email),
            password_digest,
            department: request.department,
            year: request.year,
        })
        .await;

    match student {
        Ok(student) => {
            println!("\n✅ Student created successfully!");
            println!("   Id: {}", student.id);
            println!("   Email: {}", student.email);
            println!("   Name: {}", student.name);
            Ok(())
        }
        Err(RepositoryError::DuplicateEmail) => bail!("a student with this email already exists"),
        Err(e) => Err(e.into()),
    }
}
