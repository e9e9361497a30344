//! Awards a student has received.

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
pub enum AwardCategory {
  Academic,
  Extracurricular,
  Leadership,
  #[serde(rename = "Community Service")]
  #[strum(serialize = "Community Service")]
  CommunityService,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAward {
  #[serde(rename = "_id")]
  pub id:                ObjectId,
  pub student_id:        ObjectId,
  pub award_name:        String,
  pub award_description: Option<String>,
  pub date_awarded:      DateTime<Utc>,
  pub awarding_body:     Option<String>,
  pub award_category:    Option<AwardCategory>,
  #[serde(flatten)]
  pub audit:             Audit,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentAwardInput {
  pub student_id:        Option<RawId>,
  pub award_name:        Option<String>,
  pub award_description: Option<String>,
  pub date_awarded:      Option<String>,
  pub awarding_body:     Option<String>,
  pub award_category:    Option<String>,
  #[serde(flatten)]
  pub audit:             AuditInput,
}

impl Entity for StudentAward {
  type Input = StudentAwardInput;

  const COLLECTION: &'static str = "student_awards";
  const LABEL: &'static str = "Award";
  const NAME: &'static str = "StudentAward";

  fn id(&self) -> ObjectId { self.id }

  fn audit(&self) -> &Audit { &self.audit }

  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self> {
    let f = Fields::new(Self::NAME);
    Ok(Self {
      id:                stamp.id,
      student_id:        f.required_ref("student_id", input.student_id)?,
      award_name:        f.required_text("award_name", input.award_name)?,
      award_description: f.optional_text(input.award_description),
      date_awarded:      f.required_date("date_awarded", input.date_awarded)?,
      awarding_body:     f.optional_text(input.awarding_body),
      award_category:    f.optional_enum("award_category", input.award_category)?,
      audit:             stamp.audit(&f, input.audit)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_is_optional_but_closed() {
    let mut body = StudentAwardInput {
      student_id: Some(ObjectId::new().into()),
      award_name: Some("Science fair".into()),
      date_awarded: Some("2024-03-15".into()),
      ..Default::default()
    };
    let award = StudentAward::build(body.clone(), Stamp::create()).unwrap();
    assert!(award.award_category.is_none());

    body.award_category = Some("Community Service".into());
    let award = StudentAward::build(body.clone(), Stamp::create()).unwrap();
    assert_eq!(award.award_category, Some(AwardCategory::CommunityService));
    assert_eq!(
      serde_json::to_value(&award).unwrap()["award_category"],
      "Community Service"
    );

    body.award_category = Some("Sportsmanship".into());
    let err = StudentAward::build(body, Stamp::create()).unwrap_err();
    assert_eq!(err.kind(), "ValidationError");
  }
}
