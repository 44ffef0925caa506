//! PostgreSQL-backed article store.

use crate::article::{Article, ArticleDraft};
use crate::error::AppError;
use crate::store::ArticleStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// Create the articles table if it does not exist. Call once at startup,
/// before serving traffic.
pub async fn ensure_articles_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            author VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        PgArticleStore { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn create(&self, draft: &ArticleDraft) -> Result<Article, AppError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO articles (title, content, author) VALUES ($1, $2, $3) RETURNING id")
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(&draft.author)
                .fetch_one(&self.pool)
                .await?;
        tracing::debug!(id, "created article");
        Ok(Article {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Article, AppError> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT title, content, author FROM articles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        match row {
            Some((title, content, author)) => Ok(Article {
                id,
                title,
                content,
                author,
            }),
            None => Err(AppError::NotFound(format!("no article with id={}", id))),
        }
    }

    async fn list_all(&self) -> Result<Vec<Article>, AppError> {
        let rows: Vec<(i64, String, String, String)> =
            sqlx::query_as("SELECT id, title, content, author FROM articles")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, title, content, author)| Article {
                id,
                title,
                content,
                author,
            })
            .collect())
    }
}
