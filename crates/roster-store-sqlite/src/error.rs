//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A document would have broken a unique constraint (`_id`, or an
  /// activity's `activity_id`).
  #[error("duplicate key in {collection}: {detail}")]
  Duplicate {
    collection: &'static str,
    detail:     String,
  },
}

impl Error {
  /// Reclassify unique-constraint failures from a write on `collection`.
  pub(crate) fn on_write(collection: &'static str, e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, msg)) = &e
      && code.code == rusqlite::ErrorCode::ConstraintViolation
    {
      return Error::Duplicate {
        collection,
        detail: msg.clone().unwrap_or_else(|| code.to_string()),
      };
    }
    Error::Database(e)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
