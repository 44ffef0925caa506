//! Minimal article REST service: create/read/list over one PostgreSQL table,
//! every response wrapped in the `{status, message, data}` envelope.

pub mod article;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use article::{Article, ArticleDraft};
pub use error::AppError;
pub use response::{Envelope, Payload};
pub use routes::{app, article_routes};
pub use state::AppState;
pub use store::{ensure_articles_table, ArticleStore, MemoryStore, PgArticleStore};
