use serde::{Deserialize, Serialize};

/// An article as seen by the domain. `id` is 0 until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    /// Unix seconds, fixed when the value is constructed.
    pub created_at: i64,
}

impl Article {
    pub fn new(title: impl Into<String>, slug: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            slug: slug.into(),
            tags,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Same as [`Article::new`] but targeting an existing row.
    pub fn with_id(id: i64, title: impl Into<String>, slug: impl Into<String>, tags: Vec<String>) -> Self {
        Self { id, ..Self::new(title, slug, tags) }
    }
}

impl From<models::article::Model> for Article {
    fn from(m: models::article::Model) -> Self {
        Self { id: m.id, title: m.title, slug: m.slug, tags: m.tags.into(), created_at: m.created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_is_unsaved_and_stamped() {
        let before = chrono::Utc::now().timestamp();
        let a = Article::new("T1", "t1", vec!["a".into(), "b".into()]);
        assert_eq!(a.id, 0);
        assert!(a.created_at >= before);
        assert_eq!(a.tags, vec!["a", "b"]);
    }

    #[test]
    fn with_id_keeps_the_target() {
        let a = Article::with_id(7, "T", "t", vec![]);
        assert_eq!(a.id, 7);
    }
}
