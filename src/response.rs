//! Response envelope: `{"status": <int>, "message": <string>, "data": <payload-or-null>}`.
//!
//! Every response the service emits goes through this shape. The wire
//! format is the compatibility contract, so field order and the exact
//! payload per status are fixed here.

use crate::article::Article;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The two payload shapes the service ever emits. `data: null` is the
/// envelope with no payload, not a third variant.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Id of a freshly created article, serialized as `{"id": <n>}`.
    Id { id: i64 },
    /// A list of articles. Error responses reuse this with an empty list.
    Articles(Vec<Article>),
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: u16,
    pub message: String,
    pub data: Option<Payload>,
}

impl Envelope {
    fn new(status: u16, message: &str, data: Option<Payload>) -> Self {
        Envelope {
            status,
            message: message.to_string(),
            data,
        }
    }

    /// 200 with a non-empty article list.
    pub fn success(articles: Vec<Article>) -> Self {
        Envelope::new(200, "Success", Some(Payload::Articles(articles)))
    }

    /// 201 with the new article's id.
    pub fn created(id: i64) -> Self {
        Envelope::new(201, "Success", Some(Payload::Id { id }))
    }

    /// 404 with `data: null`. Used when a single lookup finds no row.
    pub fn not_found() -> Self {
        Envelope::new(404, "Not Found", None)
    }

    /// 404 with `data: []`. Used for unknown paths and an empty listing.
    pub fn not_found_empty() -> Self {
        Envelope::new(404, "Not Found", Some(Payload::Articles(Vec::new())))
    }

    pub fn not_acceptable() -> Self {
        Envelope::new(406, "Not Acceptable", Some(Payload::Articles(Vec::new())))
    }

    pub fn method_not_allowed() -> Self {
        Envelope::new(405, "Method Not Allowed", Some(Payload::Articles(Vec::new())))
    }

    pub fn internal_error() -> Self {
        Envelope::new(500, "Internal Server Error", Some(Payload::Articles(Vec::new())))
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
