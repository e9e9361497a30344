//! The five managed record types and the [`Entity`] trait that ties each one
//! to its collection, its input struct and its write-time rules.
//!
//! Every document carries an `_id` and an [`Audit`] block. Documents are
//! built from an input struct by [`Entity::build`], which validates every
//! field and applies the [`Stamp`] for the current write.

pub mod activity;
pub mod award;
pub mod behavioral;
pub mod section;
pub mod term;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Result, id::ObjectId, validate::Fields};

pub use activity::{
  ActivityType, ExtracurricularActivity, ExtracurricularActivityInput,
  ParticipationLevel,
};
pub use award::{AwardCategory, StudentAward, StudentAwardInput};
pub use behavioral::{BehavioralRecord, BehavioralRecordInput, IncidentType};
pub use section::{ClassSection, ClassSectionInput};
pub use term::{TermDetail, TermDetailInput};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A document type stored in its own collection.
pub trait Entity:
  Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
  /// The unvalidated request body accepted on create and update.
  type Input: DeserializeOwned + fmt::Debug + Send + 'static;

  /// Collection (table) name in the document store.
  const COLLECTION: &'static str;

  /// Type name used in validation messages, e.g. `BehavioralRecord`.
  const NAME: &'static str;

  /// Short label used in client-facing messages, e.g. `Record not found`.
  const LABEL: &'static str;

  fn id(&self) -> ObjectId;

  fn audit(&self) -> &Audit;

  /// Validate `input` and assemble the document to persist.
  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self>;
}

// ─── Audit ───────────────────────────────────────────────────────────────────

/// Bookkeeping fields common to every document. The actor strings are free
/// text supplied by the client; they are not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
  pub created_by:   Option<String>,
  pub updated_by:   Option<String>,
  pub created_date: DateTime<Utc>,
  pub updated_date: DateTime<Utc>,
}

/// The audit fields as a client may send them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditInput {
  pub created_by:   Option<String>,
  pub updated_by:   Option<String>,
  pub created_date: Option<String>,
  pub updated_date: Option<String>,
}

// ─── Stamp ───────────────────────────────────────────────────────────────────

/// The write-time context a document is built under.
pub struct Stamp<'a, E> {
  pub id:       ObjectId,
  pub now:      DateTime<Utc>,
  /// The stored document being replaced, if this is an update.
  pub previous: Option<&'a E>,
}

impl<E: Entity> Stamp<'_, E> {
  /// Context for a brand-new document: fresh id, current clock.
  pub fn create() -> Self {
    Self {
      id:       ObjectId::new(),
      now:      Utc::now(),
      previous: None,
    }
  }

  /// Resolve the audit block.
  ///
  /// On create, supplied dates win over the clock. On update `updated_date`
  /// is always the clock, while `created_date` and `created_by` fall back to
  /// the previous document when not resent.
  pub fn audit(&self, fields: &Fields, input: AuditInput) -> Result<Audit> {
    let created_date = fields.optional_date("created_date", input.created_date)?;
    let updated_date = fields.optional_date("updated_date", input.updated_date)?;
    let created_by = fields.optional_text(input.created_by);
    let updated_by = fields.optional_text(input.updated_by);

    Ok(match self.previous.map(E::audit) {
      None => Audit {
        created_by,
        updated_by,
        created_date: created_date.unwrap_or(self.now),
        updated_date: updated_date.unwrap_or(self.now),
      },
      Some(prev) => Audit {
        created_by: created_by.or_else(|| prev.created_by.clone()),
        updated_by,
        created_date: created_date.unwrap_or(prev.created_date),
        updated_date: self.now,
      },
    })
  }
}

impl<'a, E: Entity> Stamp<'a, E> {
  /// Context for replacing `previous` in place.
  pub fn replace(previous: &'a E) -> Self {
    Self {
      id:       previous.id(),
      now:      Utc::now(),
      previous: Some(previous),
    }
  }
}
