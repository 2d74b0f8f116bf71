//! gRPC adapter for the article catalog.
//!
//! Each RPC decodes the request into a domain [`Article`], calls the
//! [`ArticleService`] and maps repository failures to status codes via
//! [`article_status`].

use std::sync::Arc;

use service::article::{Article, ArticleRepository, ArticleService};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::errors::article_status;
use crate::proto::article as proto;
use crate::proto::article::article_service_server::{ArticleService as ArticleRpc, ArticleServiceServer};

/// gRPC implementation of `article.v1.ArticleService`.
pub struct ArticleServer<R: ArticleRepository> {
    service: Arc<ArticleService<R>>,
}

impl<R: ArticleRepository + 'static> ArticleServer<R> {
    pub fn new(service: Arc<ArticleService<R>>) -> Self {
        Self { service }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> ArticleServiceServer<Self> {
        ArticleServiceServer::new(self)
    }
}

fn to_proto(article: Article) -> proto::Article {
    proto::Article { id: article.id, title: article.title, slug: article.slug, tags: article.tags }
}

#[tonic::async_trait]
impl<R: ArticleRepository + 'static> ArticleRpc for ArticleServer<R> {
    async fn create(
        &self,
        request: Request<proto::Article>,
    ) -> Result<Response<proto::ArticleCreateResponse>, Status> {
        let req = request.into_inner();
        let mut article = Article::new(req.title, req.slug, req.tags);

        let id = self.service.create(&mut article).await.map_err(|e| article_status("create", e))?;

        info!(id, "article created");
        Ok(Response::new(proto::ArticleCreateResponse { id }))
    }

    async fn update(
        &self,
        request: Request<proto::Article>,
    ) -> Result<Response<proto::ArticleUpdateResponse>, Status> {
        let req = request.into_inner();
        let article = Article::with_id(req.id, req.title, req.slug, req.tags);

        self.service.update(&article).await.map_err(|e| article_status("update", e))?;

        Ok(Response::new(proto::ArticleUpdateResponse {}))
    }

    async fn delete(
        &self,
        request: Request<proto::ArticleId>,
    ) -> Result<Response<proto::Empty>, Status> {
        let id = request.into_inner().id;

        self.service.delete(id).await.map_err(|e| article_status("delete", e))?;

        info!(id, "article deleted");
        Ok(Response::new(proto::Empty {}))
    }

    async fn detail(
        &self,
        request: Request<proto::ArticleId>,
    ) -> Result<Response<proto::ArticleDetailResponse>, Status> {
        let id = request.into_inner().id;

        let article = self.service.detail(id).await.map_err(|e| article_status("detail", e))?;

        Ok(Response::new(proto::ArticleDetailResponse { article: Some(to_proto(article)) }))
    }

    async fn list(
        &self,
        request: Request<proto::Pagination>,
    ) -> Result<Response<proto::ArticleListResponse>, Status> {
        let page = request.into_inner().page;

        let articles = self.service.list(page).await.map_err(|e| article_status("list", e))?;

        Ok(Response::new(proto::ArticleListResponse {
            articles: articles.into_iter().map(to_proto).collect(),
        }))
    }
}
