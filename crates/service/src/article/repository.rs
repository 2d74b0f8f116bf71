use async_trait::async_trait;

use super::domain::Article;
use crate::errors::RepositoryError;

/// Fixed number of articles per `list` page.
pub const PAGE_SIZE: u32 = 10;

/// Storage contract for articles.
///
/// `create` assigns the store-generated id to the passed article. `list` takes a
/// 1-based page; page 0 is treated as page 1. An empty page is not an error.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create(&self, article: &mut Article) -> Result<i64, RepositoryError>;
    async fn update(&self, article: &Article) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn detail(&self, id: i64) -> Result<Article, RepositoryError>;
    async fn list(&self, page: u32) -> Result<Vec<Article>, RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use common::pagination::Pagination;
    use sea_orm::DbErr;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, Article>, // key: id, iterated in store order
        next_id: i64,
    }

    #[derive(Default)]
    pub struct MockArticleRepository {
        state: Mutex<State>,
        fail_with: Mutex<Option<String>>,
    }

    impl MockArticleRepository {
        /// Make every following call fail with an opaque storage error.
        pub fn fail_with(&self, message: &str) {
            *self.fail_with.lock().unwrap() = Some(message.to_string());
        }

        pub fn len(&self) -> usize { self.state.lock().unwrap().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn check(&self) -> Result<(), RepositoryError> {
            match self.fail_with.lock().unwrap().as_ref() {
                Some(msg) => Err(RepositoryError::Storage(DbErr::Custom(msg.clone()))),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ArticleRepository for MockArticleRepository {
        async fn create(&self, article: &mut Article) -> Result<i64, RepositoryError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            if state.rows.values().any(|a| a.title == article.title) {
                return Err(RepositoryError::AlreadyExists);
            }
            state.next_id += 1;
            article.id = state.next_id;
            state.rows.insert(article.id, article.clone());
            Ok(article.id)
        }

        async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            if !state.rows.contains_key(&article.id) {
                return Err(RepositoryError::NotFound);
            }
            if state.rows.values().any(|a| a.id != article.id && a.title == article.title) {
                return Err(RepositoryError::AlreadyExists);
            }
            state.rows.insert(article.id, article.clone());
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            state.rows.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
        }

        async fn detail(&self, id: i64) -> Result<Article, RepositoryError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            state.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
        }

        async fn list(&self, page: u32) -> Result<Vec<Article>, RepositoryError> {
            self.check()?;
            let pagination = Pagination::new(page, PAGE_SIZE);
            let (_, per_page) = pagination.normalize();
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .skip(pagination.offset() as usize)
                .take(per_page as usize)
                .cloned()
                .collect())
        }
    }
}
