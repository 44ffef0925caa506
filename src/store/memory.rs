//! In-memory article store. Backs the router tests and local development
//! without a database.

use crate::article::{Article, ArticleDraft};
use crate::error::AppError;
use crate::store::ArticleStore;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Article>,
}

/// Mutex-guarded vec with sequential ids, mirroring the Postgres store's
/// observable contract.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Insert pre-existing rows, assigning sequential ids. Returns self for
    /// chaining in test setup.
    pub fn seeded(self, drafts: &[(&str, &str, &str)]) -> Self {
        {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            for (title, content, author) in drafts {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.rows.push(Article {
                    id,
                    title: (*title).to_string(),
                    content: (*content).to_string(),
                    author: (*author).to_string(),
                });
            }
        }
        self
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn create(&self, draft: &ArticleDraft) -> Result<Article, AppError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.next_id += 1;
        let article = Article {
            id: inner.next_id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
        };
        inner.rows.push(article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: i64) -> Result<Article, AppError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .rows
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no article with id={}", id)))
    }

    async fn list_all(&self) -> Result<Vec<Article>, AppError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.rows.clone())
    }
}
