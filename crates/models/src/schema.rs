//! Create-if-missing DDL for the two tables this service owns.
//!
//! Only Postgres (production) and SQLite (tests) are supported.

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

const POSTGRES_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS articles (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL UNIQUE,
        slug TEXT NOT NULL,
        tags JSONB NOT NULL DEFAULT '[]'::jsonb,
        created_at BIGINT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS logs (
        id BIGSERIAL PRIMARY KEY,
        error TEXT NOT NULL,
        created_at BIGINT NOT NULL
    )",
];

const SQLITE_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL UNIQUE,
        slug TEXT NOT NULL,
        tags TEXT NOT NULL DEFAULT '[]',
        created_at BIGINT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        error TEXT NOT NULL,
        created_at BIGINT NOT NULL
    )",
];

pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let statements = match db.get_database_backend() {
        DatabaseBackend::Postgres => POSTGRES_DDL,
        DatabaseBackend::Sqlite => SQLITE_DDL,
        other => return Err(DbErr::Custom(format!("unsupported database backend: {other:?}"))),
    };
    for sql in statements {
        db.execute_unprepared(sql).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{article, log_record};
    use sea_orm::{ActiveModelTrait, ConnectOptions, Database, EntityTrait, NotSet, Set};

    #[tokio::test]
    async fn ensure_schema_is_idempotent_and_tables_round_trip() -> Result<(), DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        ensure_schema(&db).await?;
        ensure_schema(&db).await?;

        let saved = article::ActiveModel {
            id: NotSet,
            title: Set("Rust".into()),
            slug: Set("rust".into()),
            tags: Set(vec!["lang".to_string(), "systems".to_string()].into()),
            created_at: Set(1_700_000_000),
        }
        .insert(&db)
        .await?;
        let got = article::Entity::find_by_id(saved.id).one(&db).await?.unwrap();
        assert_eq!(got.tags.0, vec!["lang", "systems"]);
        assert_eq!(got.created_at, 1_700_000_000);

        log_record::ActiveModel { id: NotSet, error: Set("boom".into()), created_at: Set(1) }
            .insert(&db)
            .await?;
        assert_eq!(log_record::Entity::find().all(&db).await?.len(), 1);
        Ok(())
    }
}
