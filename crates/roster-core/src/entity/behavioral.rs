//! Behavioral incidents, positive or negative, logged against a student.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use super::{Audit, AuditInput, Entity, Stamp};
use crate::{
  Result,
  id::{ObjectId, RawId},
  validate::Fields,
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, VariantNames,
)]
pub enum IncidentType {
  Positive,
  Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralRecord {
  #[serde(rename = "_id")]
  pub id:                 ObjectId,
  pub student_id:         ObjectId,
  pub incident_date:      DateTime<Utc>,
  pub incident_type:      IncidentType,
  pub description:        String,
  pub action_taken:       Option<String>,
  /// The staff member who handled the incident.
  pub staff_id:           Option<ObjectId>,
  pub resolution_date:    Option<DateTime<Utc>>,
  pub follow_up_required: bool,
  #[serde(flatten)]
  pub audit:              Audit,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BehavioralRecordInput {
  pub student_id:         Option<RawId>,
  pub incident_date:      Option<String>,
  pub incident_type:      Option<String>,
  pub description:        Option<String>,
  pub action_taken:       Option<String>,
  pub staff_id:           Option<RawId>,
  pub resolution_date:    Option<String>,
  pub follow_up_required: Option<bool>,
  #[serde(flatten)]
  pub audit:              AuditInput,
}

impl Entity for BehavioralRecord {
  type Input = BehavioralRecordInput;

  const COLLECTION: &'static str = "behavioral_records";
  const LABEL: &'static str = "Record";
  const NAME: &'static str = "BehavioralRecord";

  fn id(&self) -> ObjectId { self.id }

  fn audit(&self) -> &Audit { &self.audit }

  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self> {
    let f = Fields::new(Self::NAME);
    Ok(Self {
      id:                 stamp.id,
      student_id:         f.required_ref("student_id", input.student_id)?,
      incident_date:      f.required_date("incident_date", input.incident_date)?,
      incident_type:      f.required_enum("incident_type", input.incident_type)?,
      description:        f.required_text("description", input.description)?,
      action_taken:       f.optional_text(input.action_taken),
      staff_id:           f.optional_ref("staff_id", input.staff_id)?,
      resolution_date:    f.optional_date("resolution_date", input.resolution_date)?,
      follow_up_required: input.follow_up_required.unwrap_or(false),
      audit:              stamp.audit(&f, input.audit)?,
    })
  }
}
