//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_actor;
mod m20240301_000002_create_movie;
mod m20240301_000003_create_movie_actor;
mod m20240301_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_actor::Migration),
            Box::new(m20240301_000002_create_movie::Migration),
            Box::new(m20240301_000003_create_movie_actor::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000004_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn migrations_apply_on_sqlite() -> Result<(), DbErr> {
        // a single connection keeps every query on the same in-memory database
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["actor", "movie", "movie_actor"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }
        assert!(manager.has_index("actor", "uniq_actor_name").await?);
        assert!(manager.has_index("movie", "uniq_movie_title_release_date").await?);

        let row = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM seaql_migrations".to_string(),
            ))
            .await?
            .expect("count row");
        let applied: i64 = row.try_get("", "n")?;
        assert_eq!(applied, 4);
        Ok(())
    }
}
