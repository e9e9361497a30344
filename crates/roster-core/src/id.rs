//! [`ObjectId`], the 12-byte BSON identifier carried by every document.
//!
//! The textual form is 24 lowercase hex digits. Reference fields that point
//! into collections this service does not own (students, staff) use the same
//! type, so an identifier is parsed once at the boundary and then carried as
//! an `ObjectId` through every layer.

use std::{fmt, str::FromStr};

use bson::oid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Returned when a value is not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a 24-digit hexadecimal identifier")]
pub struct IdError {
  pub value: String,
}

// ─── ObjectId ────────────────────────────────────────────────────────────────

/// A BSON object id. Serialises as the bare hex string, never the extended
/// `{"$oid": ...}` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(oid::ObjectId);

impl ObjectId {
  pub fn new() -> Self { Self(oid::ObjectId::new()) }

  /// Parse the 24-digit hex form. Upper- and lower-case digits are accepted.
  pub fn parse_str(s: &str) -> Result<Self, IdError> {
    oid::ObjectId::parse_str(s).map(Self).map_err(|_| IdError {
      value: s.to_owned(),
    })
  }

  /// The second at which this identifier was generated.
  pub fn timestamp(&self) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(self.0.timestamp().timestamp_millis())
      .unwrap_or_default()
  }
}

impl Default for ObjectId {
  fn default() -> Self { Self::new() }
}

impl fmt::Display for ObjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.to_hex())
  }
}

impl FromStr for ObjectId {
  type Err = IdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse_str(s) }
}

impl Serialize for ObjectId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ObjectId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = RawId::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
  }
}

// ─── RawId ───────────────────────────────────────────────────────────────────

/// An identifier as a client sent it, before validation: the plain hex
/// string, the wrapped `{"$oid": "..."}` form, or any other JSON value.
/// Every shape deserialises, so a malformed reference is reported by
/// [`RawId::parse`] rather than by the body decoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
  Plain(String),
  Extended {
    #[serde(rename = "$oid")]
    oid: String,
  },
  Other(serde_json::Value),
}

impl RawId {
  fn text(&self) -> Option<&str> {
    match self {
      Self::Plain(s) => Some(s),
      Self::Extended { oid } => Some(oid),
      Self::Other(_) => None,
    }
  }

  /// Blank strings stand for an absent reference.
  pub fn is_blank(&self) -> bool { self.text().is_some_and(|s| s.trim().is_empty()) }

  pub fn parse(&self) -> Result<ObjectId, IdError> {
    match self {
      Self::Plain(s) | Self::Extended { oid: s } => ObjectId::parse_str(s.trim()),
      Self::Other(value) => Err(IdError {
        value: value.to_string(),
      }),
    }
  }
}

impl From<ObjectId> for RawId {
  fn from(id: ObjectId) -> Self { Self::Plain(id.to_string()) }
}

impl From<&str> for RawId {
  fn from(s: &str) -> Self { Self::Plain(s.to_owned()) }
}
