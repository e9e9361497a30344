//! Encoding and decoding between entity types and the `(id, body)` columns.
//!
//! The `id` column holds the lowercase hex identifier; `body` holds the full
//! document as compact JSON, including `_id`.

use roster_core::{ObjectId, entity::Entity};

use crate::Result;

pub fn encode_id(id: ObjectId) -> String { id.to_string() }

pub fn encode_doc<E: Entity>(doc: &E) -> Result<(String, String)> {
  Ok((encode_id(doc.id()), serde_json::to_string(doc)?))
}

pub fn decode_doc<E: Entity>(body: &str) -> Result<E> {
  Ok(serde_json::from_str(body)?)
}

/// Double-quote a collection name for interpolation into SQL.
pub fn table<E: Entity>() -> String { format!("\"{}\"", E::COLLECTION) }
