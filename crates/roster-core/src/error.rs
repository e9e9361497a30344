//! Error types for `roster-core`.

use thiserror::Error;

use crate::id::ObjectId;

/// A payload violated a schema constraint. Only the first violation found
/// (in field declaration order) is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{entity} validation failed: {field}: Path `{field}` is required.")]
  Missing {
    entity: &'static str,
    field:  &'static str,
  },

  #[error(
    "{entity} validation failed: {field}: `{value}` is not a valid enum value \
     for path `{field}` (expected one of: {allowed})"
  )]
  InvalidEnum {
    entity:  &'static str,
    field:   &'static str,
    value:   String,
    allowed: String,
  },

  #[error("{entity} validation failed: {field}: `{value}` is not a valid date")]
  InvalidDate {
    entity: &'static str,
    field:  &'static str,
    value:  String,
  },
}

/// A reference field held something that is not an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} format")]
pub struct ConversionError {
  pub field: &'static str,
  pub value: String,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Conversion(#[from] ConversionError),

  #[error("Invalid id format: {0:?}")]
  InvalidId(String),

  #[error("{entity} not found")]
  NotFound { entity: &'static str, id: ObjectId },

  /// One payload of a bulk insert failed; nothing was persisted.
  #[error("item {index}: {source}")]
  Batch {
    index:  usize,
    #[source]
    source: Box<Error>,
  },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// The innermost error of a [`Error::Batch`] chain, or `self`.
  pub fn root(&self) -> &Error {
    match self {
      Self::Batch { source, .. } => source.root(),
      other => other,
    }
  }

  /// Short machine-readable name reported to clients alongside the message.
  pub fn kind(&self) -> &'static str {
    match self.root() {
      Self::Validation(_) => "ValidationError",
      Self::Conversion(_) => "ConversionError",
      Self::InvalidId(_) => "InvalidIdError",
      Self::NotFound { .. } => "NotFoundError",
      Self::Batch { .. } | Self::Store(_) => "UnhandledError",
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
