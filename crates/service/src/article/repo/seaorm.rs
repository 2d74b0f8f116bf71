use async_trait::async_trait;
use common::pagination::Pagination;
use models::article;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::article::domain::Article;
use crate::article::repository::{ArticleRepository, PAGE_SIZE};
use crate::errors::RepositoryError;

/// Article repository backed by the `articles` table.
#[derive(Clone)]
pub struct SeaOrmArticleRepository {
    db: DatabaseConnection,
}

impl SeaOrmArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn active_model(article: &Article) -> article::ActiveModel {
    article::ActiveModel {
        id: NotSet,
        title: Set(article.title.clone()),
        slug: Set(article.slug.clone()),
        tags: Set(article.tags.clone().into()),
        created_at: Set(article.created_at),
    }
}

#[async_trait]
impl ArticleRepository for SeaOrmArticleRepository {
    async fn create(&self, article: &mut Article) -> Result<i64, RepositoryError> {
        let saved = active_model(article).insert(&self.db).await.map_err(RepositoryError::from_db)?;
        article.id = saved.id;
        Ok(saved.id)
    }

    async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        let res = article::Entity::update_many()
            .set(active_model(article))
            .filter(article::Column::Id.eq(article.id))
            .exec(&self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        if res.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let res = article::Entity::delete_by_id(id).exec(&self.db).await.map_err(RepositoryError::from_db)?;
        if res.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn detail(&self, id: i64) -> Result<Article, RepositoryError> {
        article::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(Article::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self, page: u32) -> Result<Vec<Article>, RepositoryError> {
        let (page_idx, per_page) = Pagination::new(page, PAGE_SIZE).normalize();
        let rows = article::Entity::find()
            .order_by_asc(article::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(RepositoryError::from_db)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sqlite_db;

    fn tags(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }

    #[tokio::test]
    async fn create_then_detail_round_trips() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        let mut a = Article::new("T1", "t1", tags(&["a", "b"]));
        let created_at = a.created_at;

        let id = repo.create(&mut a).await?;
        assert_eq!(id, 1);
        assert_eq!(a.id, 1);

        let got = repo.detail(id).await?;
        assert_eq!(got.title, "T1");
        assert_eq!(got.slug, "t1");
        assert_eq!(got.tags, tags(&["a", "b"]));
        assert_eq!(got.created_at, created_at);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_title_is_already_exists() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        let id = repo.create(&mut Article::new("T1", "t1", tags(&["a"]))).await?;

        let err = repo.create(&mut Article::new("T1", "t2", vec![])).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists), "got {err:?}");
        assert_eq!(repo.detail(id).await?.slug, "t1");
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_rejects_missing_ids() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        let id = repo.create(&mut Article::new("T1", "t1", vec![])).await?;

        repo.update(&Article::with_id(id, "T1 v2", "t1-v2", tags(&["x", "x"]))).await?;
        let got = repo.detail(id).await?;
        assert_eq!(got.title, "T1 v2");
        assert_eq!(got.tags, tags(&["x", "x"]));

        let err = repo.update(&Article::with_id(id + 100, "ghost", "ghost", vec![])).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(repo.list(1).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_into_taken_title_is_already_exists() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        repo.create(&mut Article::new("first", "first", vec![])).await?;
        let second = repo.create(&mut Article::new("second", "second", vec![])).await?;

        let err = repo.update(&Article::with_id(second, "first", "second", vec![])).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_row_and_reports_missing() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        let id = repo.create(&mut Article::new("T1", "t1", vec![])).await?;

        repo.delete(id).await?;
        assert!(matches!(repo.detail(id).await, Err(RepositoryError::NotFound)));
        assert!(matches!(repo.delete(id).await, Err(RepositoryError::NotFound)));
        Ok(())
    }

    #[tokio::test]
    async fn list_pages_in_store_order() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        assert!(repo.list(1).await?.is_empty());

        for i in 0..15 {
            repo.create(&mut Article::new(format!("title-{i}"), format!("slug-{i}"), vec![])).await?;
        }
        let first = repo.list(1).await?;
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].title, "title-0");
        assert_eq!(first[9].title, "title-9");

        let second = repo.list(2).await?;
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].title, "title-10");

        assert!(repo.list(3).await?.is_empty());
        assert_eq!(repo.list(0).await?, first);
        Ok(())
    }

    #[tokio::test]
    async fn second_page_of_ten_rows_is_empty() -> anyhow::Result<()> {
        let repo = SeaOrmArticleRepository::new(sqlite_db().await?);
        for i in 0..10 {
            repo.create(&mut Article::new(format!("title-{i}"), "s", vec![])).await?;
        }
        assert!(repo.list(2).await?.is_empty());
        Ok(())
    }
}
