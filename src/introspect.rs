//! Database-assisted type introspection for a parsed SELECT statement.
//!
//! The statement (minus any LIMIT) is materialized as a zero-row temporary
//! table on the supplied connection; `information_schema.columns` then
//! reports the result column names and types in declaration order, and the
//! rows are paired positionally with the parsed field entries. The pairing
//! assumes the probe preserves the SELECT list's column count and order —
//! a known correctness risk of the approach, inherited deliberately.
//!
//! All three round-trips run on the one connection because temporary tables
//! are session-scoped. Database errors propagate unmodified; a failed
//! catalog query leaves the temp table to the session's own cleanup.

use crate::{Result, SelectStatement, debug};
use sqlx::PgConnection;
use std::sync::atomic::{AtomicU64, Ordering};

/// One introspected result column: catalog name and type, the originating
/// SELECT-list expression, and a placeholder for extra per-column args.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{name} {data_type}")]
pub struct TypedField {
    pub name: String,
    pub data_type: String,
    pub expression: String,
    pub args: Vec<String>,
}

/// Session-unique probe table name. Temporary tables only collide within
/// one session, so process id plus a per-process sequence suffices.
fn probe_table_name() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    format!(
        "qslice_probe_{}_{}",
        std::process::id(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    )
}

impl SelectStatement {
    /// Resolve the statement's result columns against a live connection.
    ///
    /// When [`fields`](Self::fields) is absent (e.g. `SELECT *`), every
    /// catalog row yields its quoted column name as the expression;
    /// otherwise catalog rows pair positionally with the parsed entries.
    pub async fn fields_with_types(&self, conn: &mut PgConnection) -> Result<Vec<TypedField>> {
        let table = probe_table_name();
        debug!(%table, "creating zero-row probe table");
        let create = format!(
            "CREATE TEMPORARY TABLE {table} AS {} LIMIT 0",
            self.without_limit()
        );
        sqlx::query(sqlx::AssertSqlSafe(create))
            .execute(&mut *conn)
            .await?;

        let columns: Vec<(String, String)> = sqlx::query_as(
            "SELECT column_name::text, data_type::text \
               FROM information_schema.columns \
              WHERE table_name = $1 \
              ORDER BY ordinal_position",
        )
        .bind(&table)
        .fetch_all(&mut *conn)
        .await?;

        sqlx::query(sqlx::AssertSqlSafe(format!("DROP TABLE {table}")))
            .execute(&mut *conn)
            .await?;
        debug!(%table, columns = columns.len(), "probe table dropped");

        let typed = match self.fields() {
            None => columns
                .into_iter()
                .map(|(name, data_type)| TypedField {
                    expression: format!("\"{name}\""),
                    name,
                    data_type,
                    args: Vec::new(),
                })
                .collect(),
            Some(fields) => columns
                .into_iter()
                .zip(fields)
                .map(|((name, data_type), field)| TypedField {
                    name,
                    data_type,
                    expression: field.expression,
                    args: Vec::new(),
                })
                .collect(),
        };
        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crate::{Error, Result, SelectStatement};

    async fn typed(
        ctx: &mut IsolatedDb,
        sql: &str,
    ) -> Result<Vec<(String, String, String)>> {
        let stmt = SelectStatement::parse(sql)?;
        let mut conn = ctx.pool.acquire().await?;
        let typed = stmt.fields_with_types(&mut conn).await?;
        Ok(typed
            .into_iter()
            .map(|t| (t.name, t.data_type, t.expression))
            .collect())
    }

    async fn create_people(ctx: &mut IsolatedDb) -> Result {
        sqlx::query("CREATE TABLE people (id integer, name text)")
            .execute(&ctx.pool)
            .await?;
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn pairs_catalog_rows_with_parsed_fields(ctx: &mut IsolatedDb) -> Result {
        create_people(ctx).await?;
        let rows = typed(ctx, "SELECT id, name AS label FROM people").await?;
        assert_eq!(
            rows,
            [
                ("id".into(), "integer".into(), "id".into()),
                ("label".into(), "text".into(), "name".into()),
            ]
        );
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn star_defaults_to_quoted_column_names(ctx: &mut IsolatedDb) -> Result {
        create_people(ctx).await?;
        let rows = typed(ctx, "SELECT * FROM people").await?;
        assert_eq!(
            rows,
            [
                ("id".into(), "integer".into(), "\"id\"".into()),
                ("name".into(), "text".into(), "\"name\"".into()),
            ]
        );
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[rstest]
    #[case("SELECT id FROM people LIMIT 7")]
    #[case("SELECT id FROM people WHERE id > 3 LIMIT 7")]
    #[case("SELECT id FROM people ORDER BY id LIMIT 7 OFFSET 2")]
    #[tokio::test]
    async fn limit_is_stripped_from_the_probe(
        ctx: &mut IsolatedDb,
        #[case] sql: &'static str,
    ) -> Result {
        create_people(ctx).await?;
        let rows = typed(ctx, sql).await?;
        assert_eq!(rows, [("id".into(), "integer".into(), "id".into())]);
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn probe_tables_do_not_collide_across_calls(ctx: &mut IsolatedDb) -> Result {
        create_people(ctx).await?;
        let stmt = SelectStatement::parse("SELECT id FROM people")?;
        let mut conn = ctx.pool.acquire().await?;
        for _ in 0..3 {
            let rows = stmt.fields_with_types(&mut conn).await?;
            assert_eq!(rows.len(), 1);
        }
        Ok(())
    }

    #[test_context(IsolatedDb)]
    #[tokio::test]
    async fn database_errors_propagate(ctx: &mut IsolatedDb) -> Result {
        create_people(ctx).await?;
        let err = typed(ctx, "SELECT nope FROM people")
            .await
            .expect_err("unknown column should fail");
        assert!(matches!(err, Error::Database(_)));
        Ok(())
    }
}
