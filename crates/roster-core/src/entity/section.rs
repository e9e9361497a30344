//! Class sections and their assigned teacher.

use serde::{Deserialize, Serialize};

use super::{Audit, AuditInput, Entity, Stamp};
use crate::{
  Result,
  id::{ObjectId, RawId},
  validate::Fields,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSection {
  #[serde(rename = "_id")]
  pub id:         ObjectId,
  pub class_name: String,
  pub section:    Option<String>,
  pub teacher_id: Option<ObjectId>,
  #[serde(flatten)]
  pub audit:      Audit,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSectionInput {
  pub class_name: Option<String>,
  pub section:    Option<String>,
  pub teacher_id: Option<RawId>,
  #[serde(flatten)]
  pub audit:      AuditInput,
}

impl Entity for ClassSection {
  type Input = ClassSectionInput;

  const COLLECTION: &'static str = "class_sections";
  const LABEL: &'static str = "Section";
  const NAME: &'static str = "ClassSection";

  fn id(&self) -> ObjectId { self.id }

  fn audit(&self) -> &Audit { &self.audit }

  fn build(input: Self::Input, stamp: Stamp<'_, Self>) -> Result<Self> {
    let f = Fields::new(Self::NAME);
    Ok(Self {
      id:         stamp.id,
      class_name: f.required_text("class_name", input.class_name)?,
      section:    f.optional_text(input.section),
      teacher_id: f.optional_ref("teacher_id", input.teacher_id)?,
      audit:      stamp.audit(&f, input.audit)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn malformed_teacher_id_is_rejected() {
    let body = ClassSectionInput {
      class_name: Some("Grade 5".into()),
      teacher_id: Some("t-100".into()),
      ..Default::default()
    };
    let err = ClassSection::build(body, Stamp::create()).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
    assert_eq!(err.to_string(), "Invalid teacher_id format");
  }

  #[test]
  fn teacher_is_optional() {
    let body = ClassSectionInput {
      class_name: Some("Grade 5".into()),
      section: Some("B".into()),
      ..Default::default()
    };
    let section = ClassSection::build(body, Stamp::create()).unwrap();
    assert_eq!(section.teacher_id, None);
    assert_eq!(section.section.as_deref(), Some("B"));
  }
}
