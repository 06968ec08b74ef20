//! The five post handlers.
//!
//! Each follows the same shape: negotiation guards first, then body
//! parsing/validation, then the store, then the response. Guard and
//! validation failures return before the store is ever touched.

use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::negotiate;
use crate::error::{ApiError, message_json};
use crate::request::Request;
use crate::response::Response;
use crate::schema;
use crate::store::PostStore;

/// A validated create/update payload.
#[derive(Debug, Deserialize)]
struct PostDraft {
    title: String,
    body: String,
}

/// GET /api/posts — list, optionally filtered by `title_like` / `body_like`.
pub async fn list(req: Request, store: PostStore) -> Result<Response, ApiError> {
    negotiate::accept_json(&req)?;

    let title_like = req.query("title_like");
    let body_like = req.query("body_like");
    let posts = store.list(title_like.as_deref(), body_like.as_deref()).await?;

    Ok(Response::json(serde_json::to_vec(&posts)?))
}

/// GET /api/posts/{id} — fetch one.
pub async fn get(req: Request, store: PostStore) -> Result<Response, ApiError> {
    negotiate::accept_json(&req)?;

    let Some(id) = path_id(&req) else {
        return Ok(Response::status(StatusCode::NOT_FOUND));
    };
    let post = store.get(id).await?.ok_or(ApiError::PostNotFound(id))?;

    Ok(Response::json(serde_json::to_vec(&post)?))
}

/// DELETE /api/posts/{id}.
pub async fn delete(req: Request, store: PostStore) -> Result<Response, ApiError> {
    negotiate::accept_json(&req)?;

    let Some(id) = path_id(&req) else {
        return Ok(Response::status(StatusCode::NOT_FOUND));
    };
    store.get(id).await?.ok_or(ApiError::DeleteTargetMissing(id))?;
    store.delete(id).await?;

    let message = format!("Successfully deleted post with id {id}");
    Ok(Response::json(message_json(&message)))
}

/// POST /api/posts — create from a validated payload.
pub async fn create(req: Request, store: PostStore) -> Result<Response, ApiError> {
    negotiate::accept_json(&req)?;
    negotiate::content_is_json(&req)?;

    let draft = parse_draft(req.body())?;
    let post = store.create(&draft.title, &draft.body).await?;

    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .header("location", &format!("/api/posts/{}", post.id))
        .json(serde_json::to_vec(&post)?))
}

/// PUT /api/posts/{id} — overwrite title and body.
///
/// The body is validated before the existence check, so an invalid payload
/// against a missing id reports 422, not 404.
pub async fn update(req: Request, store: PostStore) -> Result<Response, ApiError> {
    negotiate::accept_json(&req)?;
    negotiate::content_is_json(&req)?;

    let Some(id) = path_id(&req) else {
        return Ok(Response::status(StatusCode::NOT_FOUND));
    };
    let draft = parse_draft(req.body())?;

    store.get(id).await?.ok_or(ApiError::PostNotFound(id))?;
    let post = store.update(id, &draft.title, &draft.body).await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("location", &format!("/api/posts/{}", post.id))
        .json(serde_json::to_vec(&post)?))
}

/// Decodes and validates a request body into a draft.
///
/// Parse failures and shape violations are both 422s; the message carries
/// the first violation.
fn parse_draft(body: &[u8]) -> Result<PostDraft, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    schema::validate_post(&value).map_err(ApiError::Validation)?;
    // The shape is already proven; a failure here would be a bug, not input.
    Ok(serde_json::from_value(value)?)
}

/// The `{id}` path segment as an integer. A non-numeric segment is treated
/// like an unmatched route.
fn path_id(req: &Request) -> Option<i64> {
    req.param("id")?.parse().ok()
}
