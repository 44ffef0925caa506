//! Article handlers: list, create, read, plus the routing fallbacks.

use crate::article::ArticleDraft;
use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};

/// GET /articles. An empty store answers 404 with an empty list, not 200;
/// the wire contract treats "nothing to list" as not found.
pub async fn list(State(state): State<AppState>) -> Result<Envelope, AppError> {
    let articles = state.store.list_all().await?;
    if articles.is_empty() {
        return Ok(Envelope::not_found_empty());
    }
    Ok(Envelope::success(articles))
}

/// POST /articles. An undecodable body falls through to validation with an
/// empty draft, so it answers 406 like any other invalid payload.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Envelope, AppError> {
    let draft: ArticleDraft = match serde_json::from_slice(&body) {
        Ok(draft) => draft,
        Err(err) => {
            tracing::warn!(%err, "undecodable article payload");
            ArticleDraft::default()
        }
    };
    draft.validate()?;
    let article = state.store.create(&draft).await?;
    Ok(Envelope::created(article.id))
}

/// GET /articles/{id}. An id that does not parse as an integer is logged
/// and answered exactly like a missing row.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Envelope, AppError> {
    let id: i64 = match id_str.parse() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(id = %id_str, %err, "unparseable article id");
            return Ok(Envelope::not_found());
        }
    };
    let article = state.store.find_by_id(id).await?;
    Ok(Envelope::success(vec![article]))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Envelope {
    Envelope::method_not_allowed()
}

/// Fallback for every other path shape.
pub async fn not_found() -> Envelope {
    Envelope::not_found_empty()
}
