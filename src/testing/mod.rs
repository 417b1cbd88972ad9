#![cfg(test)]
crate::reexport!(container);
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Once per test binary, RUST_LOG controlled.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

mod isolated_db_tests {
    use super::{super::*, *};

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn can_connect(ctx: &mut IsolatedDb) -> Result {
        sqlx::query("SELECT 1;").fetch_one(&ctx.pool).await?;
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn is_isolated(ctx: &mut IsolatedDb) -> Result {
        let database: String = sqlx::query_scalar("SELECT current_database();")
            .fetch_one(&ctx.pool)
            .await?;
        assert_eq!(ctx.database, database);
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[rstest]
    #[case("people")]
    #[case("temperatures")]
    #[tokio::test]
    async fn can_create_tables(ctx: &mut IsolatedDb, #[case] table: &str) -> Result {
        sqlx::query(sqlx::AssertSqlSafe(format!(
            "CREATE TABLE {table} (id INT PRIMARY KEY, name VARCHAR(255))"
        )))
        .execute(&ctx.pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
        )
        .bind(table)
        .fetch_one(&ctx.pool)
        .await?;
        assert_eq!(count, 1);
        Ok(())
    }
}
