use async_trait::async_trait;
use models::log_record;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};

use crate::errors::RepositoryError;
use crate::log::domain::LogRecord;
use crate::log::repository::LogRepository;

/// Log repository backed by the `logs` table.
#[derive(Clone)]
pub struct SeaOrmLogRepository {
    db: DatabaseConnection,
}

impl SeaOrmLogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl LogRepository for SeaOrmLogRepository {
    async fn store(&self, record: &LogRecord) -> Result<(), RepositoryError> {
        log_record::ActiveModel {
            id: NotSet,
            error: Set(record.error.clone()),
            created_at: Set(record.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(RepositoryError::from_db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sqlite_db;
    use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

    #[tokio::test]
    async fn store_appends_rows_in_order() -> anyhow::Result<()> {
        let db = sqlite_db().await?;
        let repo = SeaOrmLogRepository::new(db.clone());

        repo.store(&LogRecord::new("boom1")).await?;
        repo.store(&LogRecord::new("boom2")).await?;

        let rows = log_record::Entity::find().order_by_asc(log_record::Column::Id).all(&db).await?;
        let stored: Vec<LogRecord> = rows.into_iter().map(LogRecord::from).collect();
        assert_eq!(stored.iter().map(|r| r.error.as_str()).collect::<Vec<_>>(), vec!["boom1", "boom2"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_is_a_storage_error() -> anyhow::Result<()> {
        let db = sqlite_db().await?;
        db.execute_unprepared("DROP TABLE logs").await?;

        let err = SeaOrmLogRepository::new(db).store(&LogRecord::new("lost")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
        Ok(())
    }
}
