//! Handlers shared by every resource group, generic over the entity type.
//!
//! | Method   | Path     | Notes |
//! |----------|----------|-------|
//! | `GET`    | `/`      | Bare JSON array of every document |
//! | `GET`    | `/:id`   | 404 if not found |
//! | `POST`   | `/`      | Body: the entity's input struct; returns 201 + stored document |
//! | `POST`   | `/bulk`  | Body: array of input structs; 201 + stored documents (only where mounted) |
//! | `PUT`    | `/:id`   | Full replace; returns the new state |
//! | `DELETE` | `/:id`   | `{"message": "<Label> deleted successfully"}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  entity::Entity,
  service::{Confirmation, RecordService},
  store::DocumentStore,
};

use crate::{error::ApiError, extract::JsonBody};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn list<S, E>(
  State(service): State<RecordService<S, E>>,
) -> Result<Json<Vec<E>>, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  Ok(Json(service.find_all().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /:id`
pub async fn get_one<S, E>(
  State(service): State<RecordService<S, E>>,
  Path(id): Path<String>,
) -> Result<Json<E>, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  Ok(Json(service.find_by_id(&id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /`. Returns 201 + the stored document.
pub async fn create<S, E>(
  State(service): State<RecordService<S, E>>,
  JsonBody(body): JsonBody<E::Input>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  let doc = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(doc)))
}

/// `POST /bulk`, all-or-nothing. Returns 201 + every stored document.
pub async fn create_bulk<S, E>(
  State(service): State<RecordService<S, E>>,
  JsonBody(body): JsonBody<Vec<E::Input>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  let docs = service.create_many(body).await?;
  Ok((StatusCode::CREATED, Json(docs)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /:id`
pub async fn update<S, E>(
  State(service): State<RecordService<S, E>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<E::Input>,
) -> Result<Json<E>, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  Ok(Json(service.update(&id, body).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /:id`
pub async fn delete_one<S, E>(
  State(service): State<RecordService<S, E>>,
  Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  Ok(Json(service.delete(&id).await?))
}
