//! Storage capability consumed by the [`Runner`](crate::Runner).
//!
//! The runner never reaches for a global connection; whatever implements
//! [`Storage`] is passed in explicitly. The migration framework's
//! [`SchemaManager`] is the production implementation.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbBackend, Statement};
use sea_orm_migration::{
    SchemaManager,
    prelude::{Alias, Expr, Query},
};

use crate::{CatalogError, Row, TableSpec, schema::ID_COLUMN};

type ResultStorage<T> = Result<T, CatalogError>;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn has_table(&self, table: &str) -> ResultStorage<bool>;

    async fn create_table(&self, spec: &TableSpec) -> ResultStorage<()>;

    async fn insert(&self, table: &str, row: Row) -> ResultStorage<()>;

    /// Delete every row of `table`, returning how many were removed.
    async fn delete_all(&self, table: &str) -> ResultStorage<u64>;

    /// Make the next generated `id` of `table` equal to 1.
    async fn reset_auto_increment(&self, table: &str) -> ResultStorage<()>;
}

#[async_trait]
impl<'c> Storage for SchemaManager<'c> {
    async fn has_table(&self, table: &str) -> ResultStorage<bool> {
        Ok(SchemaManager::has_table(self, table).await?)
    }

    async fn create_table(&self, spec: &TableSpec) -> ResultStorage<()> {
        SchemaManager::create_table(self, spec.create_statement()).await?;
        Ok(())
    }

    async fn insert(&self, table: &str, row: Row) -> ResultStorage<()> {
        let (columns, values) = row.into_parts();
        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(table))
            .columns(columns.into_iter().map(Alias::new))
            .values(values.into_iter().map(Into::into))
            .map_err(|err| CatalogError::Query(err.to_string()))?;

        let db = self.get_connection();
        db.execute(db.get_database_backend().build(&stmt)).await?;
        Ok(())
    }

    async fn delete_all(&self, table: &str) -> ResultStorage<u64> {
        let stmt = Query::delete().from_table(Alias::new(table)).to_owned();

        let db = self.get_connection();
        let result = db.execute(db.get_database_backend().build(&stmt)).await?;
        Ok(result.rows_affected())
    }

    async fn reset_auto_increment(&self, table: &str) -> ResultStorage<()> {
        let db = self.get_connection();
        let backend = db.get_database_backend();

        let sql = match backend {
            DbBackend::MySql => format!("ALTER TABLE `{table}` AUTO_INCREMENT = 1"),
            DbBackend::Postgres => format!(
                "SELECT setval(pg_get_serial_sequence('{table}', '{ID_COLUMN}'), 1, false)"
            ),
            DbBackend::Sqlite => {
                // sqlite_sequence only exists once an AUTOINCREMENT table was created.
                let sequence = db
                    .query_one(Statement::from_string(
                        backend,
                        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence';",
                    ))
                    .await?;
                if sequence.is_none() {
                    return Ok(());
                }
                let reset = Query::delete()
                    .from_table(Alias::new("sqlite_sequence"))
                    .and_where(Expr::col(Alias::new("name")).eq(table))
                    .to_owned();
                db.execute(backend.build(&reset)).await?;
                return Ok(());
            }
        };

        db.execute(Statement::from_string(backend, sql)).await?;
        Ok(())
    }
}
