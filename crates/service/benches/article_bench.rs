use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::article::{Article, ArticleService};
use service::article::repository::mock::MockArticleRepository;
use service::log::{LogRecord, LogService};
use service::log::repository::mock::MockLogRepository;

fn bench_article_service(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = ArticleService::new(Arc::new(MockArticleRepository::default()));

    // seed one article to read back
    let id = rt.block_on(svc.create(&mut Article::new("bench", "bench", vec!["tag1".into(), "tag2".into()]))).unwrap();

    let mut n = 0u64;
    c.bench_function("article_service_create", |b| {
        b.iter(|| {
            n += 1;
            let mut article = Article::new(format!("title-{n}"), "slug", vec!["tag1".into()]);
            rt.block_on(svc.create(&mut article)).unwrap();
        });
    });

    c.bench_function("article_service_detail", |b| {
        b.iter(|| rt.block_on(svc.detail(id)).unwrap());
    });

    c.bench_function("article_service_list", |b| {
        b.iter(|| rt.block_on(svc.list(1)).unwrap());
    });
}

fn bench_log_service(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = LogService::new(Arc::new(MockLogRepository::default()));

    c.bench_function("log_service_store", |b| {
        b.iter(|| rt.block_on(svc.store(&LogRecord::new("error"))).unwrap());
    });
}

criterion_group!(benches, bench_article_service, bench_log_service);
criterion_main!(benches);
