use crate::testing::*;
use sqlx::PgPool;
use test_context::AsyncTestContext;
pub use test_context::test_context;

/// Per-test context owning a freshly created database, dropped on teardown.
pub struct IsolatedDb {
    pub pool: PgPool,
    pub database: String,
}

impl IsolatedDb {
    async fn create_random_database(admin: &PgPool) -> String {
        use rand::Rng;
        let suffix: String = rand::rng()
            .sample_iter(&rand::distr::Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let database = format!("test_db_{}", suffix.to_lowercase());

        sqlx::query(sqlx::AssertSqlSafe(format!("CREATE DATABASE {database}")))
            .execute(admin)
            .await
            .expect("Failed to create test database");
        database
    }
}

impl AsyncTestContext for IsolatedDb {
    async fn setup() -> Self {
        crate::testing::common_init();
        let admin = pool("postgres").await;
        let database = Self::create_random_database(&admin).await;

        Self {
            pool: pool(&database).await,
            database,
        }
    }

    async fn teardown(self) {
        self.pool.close().await;
        let admin = pool("postgres").await;
        sqlx::query(sqlx::AssertSqlSafe(format!(
            "DROP DATABASE {}",
            self.database
        )))
        .execute(&admin)
        .await
        .expect("Failed to drop test database");
    }
}
