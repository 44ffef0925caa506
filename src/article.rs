//! Article entity and create-payload validation.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// A blog article row. The id is assigned by the store on insert and is
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Payload accepted by POST /articles. Absent fields decode to empty
/// strings and are rejected by [`ArticleDraft::validate`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl ArticleDraft {
    /// All of title/content/author must be non-empty.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ] {
            if value.is_empty() {
                return Err(AppError::Validation(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
