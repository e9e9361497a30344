//! Academic terms with their date range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Audit, AuditInput, Entity, Stamp};
use crate::{Result, id::ObjectId, validate::Fields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDetail {
  #[serde(rename = "_id")]
  pub id:            ObjectId,
  pub term_name:     String,
  /// Free text, e.g. `2024-2025`.
  pub academic_year: String,
  pub start_date:    DateTime<Utc>,
  pub end_date:      DateTime<Utc>,
  #[serde(flatten)]
  pub audit:         Audit,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermDetailInput {
  pub term_name:     Option<String>,
  pub academic_year: Option<String>,
  pub start_date:    Option<String>,
  pub end_date:      Option<String>,
  #[serde(flatten)]
  pub audit:         AuditInput,
}

impl Entity for TermDetail {
  type Input = TermDetailInput;

  const COLLECTION: &'static str = "term_details";
  const LABEL: &'static str = "Term";
  const NAME: &'static str = "TermDetail";

  fn id(&self) -> ObjectId { self.id }

  fn audit(&self) -> &Audit { &self.audit }

  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self> {
    let f = Fields::new(Self::NAME);
    Ok(Self {
      id:            stamp.id,
      term_name:     f.required_text("term_name", input.term_name)?,
      academic_year: f.required_text("academic_year", input.academic_year)?,
      start_date:    f.required_date("start_date", input.start_date)?,
      end_date:      f.required_date("end_date", input.end_date)?,
      audit:         stamp.audit(&f, input.audit)?,
    })
  }
}
