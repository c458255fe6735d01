//! Demo data seeder
//!
//! Populates the database with random employees, linked user accounts,
//! and payout requests, processing a random subset through the real
//! repository code path. Intended for demos and manual testing:
//!
//! ```bash
//! cargo run -p payroll-seed -- --count 10
//! ```

use anyhow::Context;
use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use clap::Parser;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use payroll_common::auth::hash_password;
use payroll_core::entities::{Employee, PayoutRequest, User};
use payroll_core::traits::{EmployeeRepository, PayoutRequestRepository, UserRepository};
use payroll_core::{DomainError, Role, SnowflakeGenerator};
use payroll_db::{
    create_pool, run_migrations, DatabaseConfig, PgEmployeeRepository, PgPayoutRequestRepository,
    PgUserRepository,
};

const POSITIONS: &[&str] = &[
    "Software Engineer",
    "Designer",
    "Manager",
    "QA Specialist",
    "HR Specialist",
    "Accountant",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Bob", "Eve", "Tom", "Anna", "Chris", "Mike", "Sophia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Martinez", "Lee", "Wilson",
    "Taylor",
];

#[derive(Parser, Debug)]
#[command(name = "payroll-seed")]
#[command(about = "Populate the database with demo employees, users, and payout requests")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`)
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Number of employees to create
    #[arg(long, default_value_t = 10)]
    count: u32,

    /// Password assigned to every generated user
    #[arg(long, default_value = "Password123")]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = payroll_common::try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let cli = Cli::parse();

    let db_config = DatabaseConfig {
        url: cli.database_url.clone(),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    let employee_repo = PgEmployeeRepository::new(pool.clone());
    let user_repo = PgUserRepository::new(pool.clone());
    let payout_repo = PgPayoutRequestRepository::new(pool);

    let generator = SnowflakeGenerator::default();
    let password_hash = hash_password(&cli.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    for i in 0..cli.count {
        let first_name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("John");
        let last_name = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
        let position = POSITIONS.choose(&mut rng).copied().unwrap_or("Manager");

        // Monthly rate between 500.00 and 1200.00
        let salary_rate = Decimal::new(rng.gen_range(50_000..=120_000), 2);
        let hire_date = today - Duration::days(rng.gen_range(30..365 * 5));

        let mut employee = Employee::new(
            generator.generate(),
            first_name.to_string(),
            last_name.to_string(),
            position.to_string(),
            salary_rate,
            hire_date,
        );
        employee.available_earnings = accrued_earnings(hire_date, today, salary_rate, &mut rng);
        employee_repo.create(&employee).await?;

        let username = format!("{}_{}_{}", first_name.to_lowercase(), last_name.to_lowercase(), i);
        let user = User::new(generator.generate(), username, Some(employee.id));
        user_repo.create(&user, &password_hash).await?;

        if employee.holds_accountant_position() {
            user_repo.grant_role(user.id, Role::Accountant).await?;
        }

        let requests = seed_payout_requests(&payout_repo, &generator, &employee, &mut rng).await?;

        tracing::info!(
            employee = %employee.full_name(),
            position = %employee.position,
            available_earnings = %employee.available_earnings,
            payout_requests = requests,
            "Created employee"
        );
    }

    tracing::info!(count = cli.count, "Seeding complete");
    Ok(())
}

/// Earnings accrued since a synthetic last-payout date: whole months
/// elapsed times the monthly rate, floored at zero
fn accrued_earnings(
    hire_date: NaiveDate,
    today: NaiveDate,
    salary_rate: Decimal,
    rng: &mut impl Rng,
) -> Decimal {
    let last_payout = hire_date + Months::new(rng.gen_range(2..=6));
    let months_since = i64::from(today.year() - last_payout.year()) * 12
        + i64::from(today.month() as i32 - last_payout.month() as i32);

    (Decimal::from(months_since) * salary_rate).max(Decimal::ZERO)
}

/// Create 1-3 pending requests for an employee and process a random
/// subset through the real transaction path
async fn seed_payout_requests(
    payout_repo: &PgPayoutRequestRepository,
    generator: &SnowflakeGenerator,
    employee: &Employee,
    rng: &mut impl Rng,
) -> anyhow::Result<u32> {
    let mut created = 0;
    let mut remaining = employee.available_earnings;

    for _ in 0..rng.gen_range(1..=3) {
        // Amount between 10.00 and min(remaining, 500.00), in cents
        let max_cents = remaining
            .min(Decimal::new(50_000, 2))
            .mantissa()
            .min(i128::from(i64::MAX)) as i64;
        if max_cents < 1_000 {
            continue;
        }

        let amount = Decimal::new(rng.gen_range(1_000..=max_cents), 2);
        let request = PayoutRequest::new(generator.generate(), employee.id, amount);
        payout_repo.create(&request).await?;
        created += 1;

        if rng.gen_bool(0.5) {
            match payout_repo.process(request.id).await {
                Ok(processed) => remaining -= processed.amount,
                // Lifecycle errors just leave the request pending
                Err(DomainError::InsufficientEarnings { .. })
                | Err(DomainError::AlreadyProcessed(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(created)
}
