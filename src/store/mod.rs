//! Article persistence: trait plus PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_articles_table, PgArticleStore};

use crate::article::{Article, ArticleDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// The only read/write path to persistent article state.
///
/// Implementations must assign a fresh unique id on create and report a
/// missing row from `find_by_id` as [`AppError::NotFound`]. `list_all`
/// imposes no ordering and returns an empty vec for an empty store.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn create(&self, draft: &ArticleDraft) -> Result<Article, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Article, AppError>;
    async fn list_all(&self) -> Result<Vec<Article>, AppError>;
}
