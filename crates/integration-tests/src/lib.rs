//! End-to-end tests for the Lunev shop API.
//!
//! # Running Tests
//!
//! ```bash
//! # Create the tables once
//! psql "$DATABASE_URL" -f crates/api/schema.sql
//!
//! # Start the server
//! cargo run -p lunev-shop-api
//!
//! # Run the ignored tests against it
//! cargo test -p lunev-shop-integration-tests -- --ignored
//! ```
//!
//! `SHOP_API_BASE_URL` selects the server (default `http://localhost:3002`).
//! The database URL is read the same way the server reads it; tests seed
//! catalogue rows directly because the API has no write endpoints for them.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use lunev_shop_api::config::{DEFAULT_DATABASE_URL, PoolConfig};
use lunev_shop_api::db;

/// Base URL of the API under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHOP_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}

fn database_url() -> SecretString {
    std::env::var("SHOP_API_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_or_else(|_| SecretString::from(DEFAULT_DATABASE_URL), SecretString::from)
}

/// Errors while preparing test fixtures.
pub type FixtureError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP client, server URL, and a pool for seeding fixtures.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: PgPool,
}

impl TestContext {
    /// Build a context from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL cannot be parsed.
    pub fn new() -> Result<Self, FixtureError> {
        let pool = db::create_pool(&database_url(), PoolConfig::default())?;
        Ok(Self {
            client: Client::new(),
            base_url: base_url(),
            pool,
        })
    }

    /// Absolute URL for an API path such as `/api/products`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Insert a product and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn seed_product(&self, bonus_points: i32) -> Result<i32, FixtureError> {
        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO products (name, price, main_image, color_options, bonus_points)
            VALUES ($1, 79990.00, 'img/test.png', '{black,white}', $2)
            RETURNING product_id
            ",
        )
        .bind(format!("Test product {}", Uuid::new_v4()))
        .bind(bonus_points)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Register a fresh user through the API; returns `(id, email, password)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no user id.
    pub async fn register_user(&self) -> Result<(i64, String, String), FixtureError> {
        let email = unique_email();
        let password = format!("pw-{}", Uuid::new_v4());
        let body: Value = self
            .client
            .post(self.url("/api/register"))
            .json(&json!({
                "email": email,
                "password": password,
                "firstName": "Иван",
                "lastName": "Тестов",
            }))
            .send()
            .await?
            .json()
            .await?;
        let id = body["user"]["id"]
            .as_i64()
            .ok_or_else(|| format!("registration returned no user id: {body}"))?;
        Ok((id, email, password))
    }
}

/// A throwaway schema holding its own `categories` and `products` tables.
///
/// Lets a test run the catalogue queries against a products table shaped
/// differently from the shared one.
pub struct CatalogueSchema {
    pub name: String,
    /// Pool whose `search_path` is this schema only.
    pub pool: PgPool,
    admin: PgPool,
}

impl CatalogueSchema {
    /// Create the schema and run `products_ddl` inside it after a
    /// `categories (id, name)` table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or the DDL fails.
    pub async fn create(products_ddl: &str) -> Result<Self, FixtureError> {
        let url = database_url();
        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(db::connect_options(&url)?)
            .await?;

        let name = format!("catalogue_{}", Uuid::new_v4().simple());
        sqlx::raw_sql(&format!("CREATE SCHEMA {name}")).execute(&admin).await?;

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(db::connect_options(&url)?.options([("search_path", name.as_str())]))
            .await?;
        sqlx::raw_sql("CREATE TABLE categories (id SERIAL PRIMARY KEY, name TEXT NOT NULL)")
            .execute(&pool)
            .await?;
        sqlx::raw_sql(products_ddl).execute(&pool).await?;

        Ok(Self { name, pool, admin })
    }

    /// Drop the schema and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the drop fails.
    pub async fn teardown(self) -> Result<(), FixtureError> {
        self.pool.close().await;
        sqlx::raw_sql(&format!("DROP SCHEMA {} CASCADE", self.name))
            .execute(&self.admin)
            .await?;
        Ok(())
    }
}

/// An email address no other test run has used.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4().simple())
}
