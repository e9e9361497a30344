//! Extracurricular participation: sports, arts, clubs and competitions.

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
pub enum ActivityType {
  Sports,
  Arts,
  Clubs,
  Competitions,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, VariantNames,
)]
pub enum ParticipationLevel {
  School,
  District,
  State,
  National,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtracurricularActivity {
  #[serde(rename = "_id")]
  pub id:                     ObjectId,
  /// Assigned once on create, unique across the collection, never changed.
  pub activity_id:            String,
  pub student_id:             ObjectId,
  pub activity_name:          String,
  pub activity_type:          ActivityType,
  pub participation_date:     DateTime<Utc>,
  pub level_of_participation: ParticipationLevel,
  pub award_received:         Option<String>,
  pub teacher_in_charge:      Option<ObjectId>,
  pub comments:               Option<String>,
  #[serde(flatten)]
  pub audit:                  Audit,
}

/// Request body for activities. There is deliberately no `activity_id`: the
/// service always assigns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtracurricularActivityInput {
  pub student_id:             Option<RawId>,
  pub activity_name:          Option<String>,
  pub activity_type:          Option<String>,
  pub participation_date:     Option<String>,
  pub level_of_participation: Option<String>,
  pub award_received:         Option<String>,
  pub teacher_in_charge:      Option<RawId>,
  pub comments:               Option<String>,
  #[serde(flatten)]
  pub audit:                  AuditInput,
}

impl Entity for ExtracurricularActivity {
  type Input = ExtracurricularActivityInput;

  const COLLECTION: &'static str = "extracurricular_activities";
  const LABEL: &'static str = "Activity";
  const NAME: &'static str = "ExtracurricularActivity";

  fn id(&self) -> ObjectId { self.id }

  fn audit(&self) -> &Audit { &self.audit }

  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self> {
    let activity_id = match stamp.previous {
      Some(prev) => prev.activity_id.clone(),
      None => ObjectId::new().to_string(),
    };

    let f = Fields::new(Self::NAME);
    Ok(Self {
      id: stamp.id,
      activity_id,
      student_id: f.required_ref("student_id", input.student_id)?,
      activity_name: f.required_text("activity_name", input.activity_name)?,
      activity_type: f.required_enum("activity_type", input.activity_type)?,
      participation_date: f
        .required_date("participation_date", input.participation_date)?,
      level_of_participation: f
        .required_enum("level_of_participation", input.level_of_participation)?,
      award_received: f.optional_text(input.award_received),
      teacher_in_charge: f
        .optional_ref("teacher_in_charge", input.teacher_in_charge)?,
      comments: f.optional_text(input.comments),
      audit: stamp.audit(&f, input.audit)?,
    })
  }
}
