//! Field-level validation shared by all entity types.
//!
//! Input structs carry loosely-typed values (`Option<String>`, [`RawId`]);
//! [`Fields`] turns each one into its checked representation or fails with
//! the violated constraint. Validation is structural only: a well-formed
//! reference is accepted without looking up the referenced document.
//!
//! Empty or whitespace-only strings count as absent everywhere.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use strum::VariantNames;

use crate::{
  Result,
  error::{ConversionError, ValidationError},
  id::{ObjectId, RawId},
};

const DATE_TIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S",
];

// Day-first is what the web client's date pickers submit.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse any accepted date spelling into a UTC instant. Dates without a time
/// component resolve to midnight UTC.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
  let text = text.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
    return Some(dt.with_timezone(&Utc));
  }
  for fmt in DATE_TIME_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
      return Some(naive.and_utc());
    }
  }
  for fmt in DATE_FORMATS {
    if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
      return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
  }
  None
}

fn present(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.trim().is_empty())
}

/// Validator bound to one entity name, used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct Fields {
  entity: &'static str,
}

impl Fields {
  pub fn new(entity: &'static str) -> Self { Self { entity } }

  fn missing(&self, field: &'static str) -> ValidationError {
    ValidationError::Missing {
      entity: self.entity,
      field,
    }
  }

  pub fn required_text(
    &self,
    field: &'static str,
    value: Option<String>,
  ) -> Result<String> {
    Ok(present(value).ok_or_else(|| self.missing(field))?)
  }

  pub fn optional_text(&self, value: Option<String>) -> Option<String> {
    present(value)
  }

  pub fn required_date(
    &self,
    field: &'static str,
    value: Option<String>,
  ) -> Result<DateTime<Utc>> {
    self
      .optional_date(field, value)?
      .ok_or_else(|| self.missing(field).into())
  }

  pub fn optional_date(
    &self,
    field: &'static str,
    value: Option<String>,
  ) -> Result<Option<DateTime<Utc>>> {
    let Some(text) = present(value) else {
      return Ok(None);
    };
    match parse_date(&text) {
      Some(dt) => Ok(Some(dt)),
      None => Err(
        ValidationError::InvalidDate {
          entity: self.entity,
          field,
          value: text,
        }
        .into(),
      ),
    }
  }

  pub fn required_enum<T>(&self, field: &'static str, value: Option<String>) -> Result<T>
  where
    T: FromStr + VariantNames,
  {
    self
      .optional_enum(field, value)?
      .ok_or_else(|| self.missing(field).into())
  }

  pub fn optional_enum<T>(
    &self,
    field: &'static str,
    value: Option<String>,
  ) -> Result<Option<T>>
  where
    T: FromStr + VariantNames,
  {
    let Some(text) = present(value) else {
      return Ok(None);
    };
    match text.parse::<T>() {
      Ok(v) => Ok(Some(v)),
      Err(_) => Err(
        ValidationError::InvalidEnum {
          entity: self.entity,
          field,
          value: text,
          allowed: T::VARIANTS.join(", "),
        }
        .into(),
      ),
    }
  }

  /// A missing reference is a [`ValidationError`]; a malformed one is a
  /// [`ConversionError`].
  pub fn required_ref(
    &self,
    field: &'static str,
    value: Option<RawId>,
  ) -> Result<ObjectId> {
    self
      .optional_ref(field, value)?
      .ok_or_else(|| self.missing(field).into())
  }

  pub fn optional_ref(
    &self,
    field: &'static str,
    value: Option<RawId>,
  ) -> Result<Option<ObjectId>> {
    match value {
      None => Ok(None),
      Some(raw) if raw.is_blank() => Ok(None),
      Some(raw) => raw.parse().map(Some).map_err(|e| {
        ConversionError {
          field,
          value: e.value,
        }
        .into()
      }),
    }
  }
}
