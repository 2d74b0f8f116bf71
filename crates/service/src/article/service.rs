use std::sync::Arc;

use tracing::{error, instrument};

use super::domain::Article;
use super::repository::ArticleRepository;
use crate::errors::RepositoryError;

/// Article service: forwards to the repository and logs every failure once.
pub struct ArticleService<R: ArticleRepository> {
    repo: Arc<R>,
}

fn log_failure(op: &'static str, err: &RepositoryError) {
    error!(op, kind = err.kind(), error = %err, "article repository call failed");
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new article and return its id. The id is also written back
    /// into `article`.
    ///
    /// # Examples
    /// ```
    /// use service::article::{Article, ArticleService, repository::mock::MockArticleRepository};
    /// use std::sync::Arc;
    /// let svc = ArticleService::new(Arc::new(MockArticleRepository::default()));
    /// let mut article = Article::new("T1", "t1", vec!["a".into(), "b".into()]);
    /// let id = tokio_test::block_on(svc.create(&mut article)).unwrap();
    /// assert_eq!(id, 1);
    /// assert_eq!(article.id, 1);
    /// ```
    #[instrument(skip(self, article), fields(title = %article.title))]
    pub async fn create(&self, article: &mut Article) -> Result<i64, RepositoryError> {
        self.repo.create(article).await.inspect_err(|e| log_failure("create", e))
    }

    #[instrument(skip(self, article), fields(id = article.id))]
    pub async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        self.repo.update(article).await.inspect_err(|e| log_failure("update", e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.repo.delete(id).await.inspect_err(|e| log_failure("delete", e))
    }

    #[instrument(skip(self))]
    pub async fn detail(&self, id: i64) -> Result<Article, RepositoryError> {
        self.repo.detail(id).await.inspect_err(|e| log_failure("detail", e))
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: u32) -> Result<Vec<Article>, RepositoryError> {
        self.repo.list(page).await.inspect_err(|e| log_failure("list", e))
    }
}
