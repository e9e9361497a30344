//! Integration tests for `SqliteStore` and the record services against an
//! in-memory database.

use std::sync::Arc;

use chrono::{Duration, Utc};
use roster_core::{
  Error, ObjectId,
  entity::{
    BehavioralRecord, BehavioralRecordInput, ClassSection, ClassSectionInput,
    Entity, ExtracurricularActivity, ExtracurricularActivityInput, Stamp,
    StudentAwardInput, TermDetail, TermDetailInput,
  },
  error::ValidationError,
  service::{
    BehavioralRecordService, ClassSectionService, ExtracurricularActivityService,
    RecordService, StudentAwardService, TermDetailService,
  },
  store::DocumentStore,
};

use crate::SqliteStore;

async fn store() -> Arc<SqliteStore> {
  Arc::new(
    SqliteStore::open_in_memory()
      .await
      .expect("in-memory store"),
  )
}

fn term(name: &str) -> TermDetailInput {
  TermDetailInput {
    term_name: Some(name.into()),
    academic_year: Some("2024-2025".into()),
    start_date: Some("2024-06-01".into()),
    end_date: Some("2024-12-01".into()),
    ..Default::default()
  }
}

fn section(name: &str) -> ClassSectionInput {
  ClassSectionInput {
    class_name: Some(name.into()),
    section: Some("A".into()),
    ..Default::default()
  }
}

fn behavioral(incident_type: &str) -> BehavioralRecordInput {
  BehavioralRecordInput {
    student_id: Some(ObjectId::new().into()),
    incident_date: Some("2024-09-12".into()),
    incident_type: Some(incident_type.into()),
    description: Some("Playground incident".into()),
    ..Default::default()
  }
}

fn activity() -> ExtracurricularActivityInput {
  ExtracurricularActivityInput {
    student_id: Some(ObjectId::new().into()),
    activity_name: Some("Orchestra".into()),
    activity_type: Some("Arts".into()),
    participation_date: Some("2024-05-02".into()),
    level_of_participation: Some("School".into()),
    ..Default::default()
  }
}

// ─── Raw store ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_by_id() {
  let s = store().await;
  let doc = TermDetail::build(term("Term 1"), Stamp::create()).unwrap();

  s.insert(doc.clone()).await.unwrap();

  let fetched = s.find_by_id::<TermDetail>(doc.id).await.unwrap();
  assert_eq!(fetched, Some(doc));
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  let result = s.find_by_id::<TermDetail>(ObjectId::new()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn collections_are_separate() {
  let s = store().await;
  let doc = TermDetail::build(term("Term 1"), Stamp::create()).unwrap();
  s.insert(doc.clone()).await.unwrap();

  assert!(s.find_all::<ClassSection>().await.unwrap().is_empty());
  assert!(s.find_by_id::<ClassSection>(doc.id).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_returns_insertion_order() {
  let s = store().await;
  for name in ["Term 1", "Term 2", "Term 3"] {
    let doc = TermDetail::build(term(name), Stamp::create()).unwrap();
    s.insert(doc).await.unwrap();
  }

  let names: Vec<String> = s
    .find_all::<TermDetail>()
    .await
    .unwrap()
    .into_iter()
    .map(|t| t.term_name)
    .collect();
  assert_eq!(names, ["Term 1", "Term 2", "Term 3"]);
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
  let s = store().await;
  let doc = TermDetail::build(term("Term 1"), Stamp::create()).unwrap();
  s.insert(doc.clone()).await.unwrap();

  let err = s.insert(doc).await.unwrap_err();
  assert!(matches!(err, crate::Error::Duplicate { collection: "term_details", .. }));
}

#[tokio::test]
async fn activity_id_unique_across_collection() {
  let s = store().await;
  let first = ExtracurricularActivity::build(activity(), Stamp::create()).unwrap();
  let mut second = ExtracurricularActivity::build(activity(), Stamp::create()).unwrap();
  second.activity_id = first.activity_id.clone();

  s.insert(first).await.unwrap();
  let err = s.insert(second).await.unwrap_err();
  assert!(matches!(err, crate::Error::Duplicate { .. }));
  assert_eq!(s.find_all::<ExtracurricularActivity>().await.unwrap().len(), 1);
}

#[tokio::test]
async fn insert_many_rolls_back_on_conflict() {
  let s = store().await;
  let existing = ClassSection::build(section("7"), Stamp::create()).unwrap();
  s.insert(existing.clone()).await.unwrap();

  let fresh = ClassSection::build(section("8"), Stamp::create()).unwrap();
  let err = s
    .insert_many(vec![fresh.clone(), existing])
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Duplicate { .. }));

  assert!(s.find_by_id::<ClassSection>(fresh.id).await.unwrap().is_none());
  assert_eq!(s.find_all::<ClassSection>().await.unwrap().len(), 1);
}

#[tokio::test]
async fn replace_and_delete_report_missing() {
  let s = store().await;
  let doc = ClassSection::build(section("9"), Stamp::create()).unwrap();

  assert!(s.replace(doc.clone()).await.unwrap().is_none());
  assert!(!s.delete::<ClassSection>(doc.id).await.unwrap());
  assert!(s.find_all::<ClassSection>().await.unwrap().is_empty());
}

#[tokio::test]
async fn closed_store_fails_writes() {
  let s = SqliteStore::open_in_memory().await.unwrap();
  let handle = s.clone();
  s.close().await.unwrap();

  let doc = TermDetail::build(term("Term 1"), Stamp::create()).unwrap();
  assert!(matches!(
    handle.insert(doc).await.unwrap_err(),
    crate::Error::Database(_)
  ));
}

// ─── Services ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_incident_type_persists_nothing() {
  let svc = BehavioralRecordService::new(store().await);

  for bad in ["Neutral", "positive", "NEGATIVE", "Other"] {
    let err = svc.create(behavioral(bad)).await.unwrap_err();
    assert!(
      matches!(
        err,
        Error::Validation(ValidationError::InvalidEnum {
          field: "incident_type",
          ..
        })
      ),
      "{bad}: {err:?}"
    );
  }

  assert!(svc.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn behavioral_record_round_trip() {
  let svc = BehavioralRecordService::new(store().await);
  let staff = ObjectId::new();

  let mut body = behavioral("Negative");
  body.staff_id = Some(staff.into());
  body.follow_up_required = Some(true);

  let created = svc.create(body).await.unwrap();
  let fetched = svc.find_by_id(&created.id.to_string()).await.unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.staff_id, Some(staff));
}

#[tokio::test]
async fn malformed_reference_is_conversion_error() {
  let svc = BehavioralRecordService::new(store().await);
  let mut body = behavioral("Positive");
  body.student_id = Some("12345".into());

  let err = svc.create(body).await.unwrap_err();
  assert!(matches!(err, Error::Conversion(_)));
  assert!(svc.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn successive_activities_get_distinct_activity_ids() {
  let svc = ExtracurricularActivityService::new(store().await);

  let a = svc.create(activity()).await.unwrap();
  let b = svc.create(activity()).await.unwrap();
  assert_ne!(a.activity_id, b.activity_id);
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn activity_update_keeps_activity_id() {
  let svc = ExtracurricularActivityService::new(store().await);
  let created = svc.create(activity()).await.unwrap();

  let mut body = activity();
  body.level_of_participation = Some("National".into());
  let updated = svc.update(&created.id.to_string(), body).await.unwrap();

  assert_eq!(updated.activity_id, created.activity_id);
  let stored = svc.find_by_id(&created.id.to_string()).await.unwrap();
  assert_eq!(stored.activity_id, created.activity_id);
}

#[tokio::test]
async fn create_many_is_atomic_and_reports_failing_item() {
  let svc = StudentAwardService::new(store().await);
  let award = |name: &str| StudentAwardInput {
    student_id: Some(ObjectId::new().into()),
    award_name: Some(name.into()),
    date_awarded: Some("2024-03-15".into()),
    ..Default::default()
  };

  let mut bad = award("Spelling bee");
  bad.award_category = Some("Spelling".into());
  let batch = vec![award("Maths olympiad"), award("Essay prize"), bad, award("Art")];

  let err = svc.create_many(batch).await.unwrap_err();
  match &err {
    Error::Batch { index, source } => {
      assert_eq!(*index, 2);
      assert!(matches!(
        **source,
        Error::Validation(ValidationError::InvalidEnum {
          field: "award_category",
          ..
        })
      ));
    }
    other => panic!("unexpected {other:?}"),
  }
  assert!(svc.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_many_inserts_all() {
  let svc = ClassSectionService::new(store().await);
  let created = svc
    .create_many(vec![section("5"), section("6"), section("7")])
    .await
    .unwrap();
  assert_eq!(created.len(), 3);
  assert_eq!(svc.find_all().await.unwrap(), created);
}

#[tokio::test]
async fn update_missing_leaves_collection_unchanged() {
  let svc = TermDetailService::new(store().await);
  svc.create(term("Term 1")).await.unwrap();
  let before = svc.find_all().await.unwrap();

  let err = svc
    .update(&ObjectId::new().to_string(), term("Term 9"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::NotFound { entity: "Term", .. }));

  let after = svc.find_all().await.unwrap();
  assert_eq!(before.len(), after.len());
  assert_eq!(before, after);
}

#[tokio::test]
async fn update_replaces_fields_and_refreshes_updated_date() {
  let s = store().await;
  let svc = ClassSectionService::new(Arc::clone(&s));

  // Backdate the stored document so the refresh is observable.
  let mut doc = ClassSection::build(section("10"), Stamp::create()).unwrap();
  doc.audit.created_date = Utc::now() - Duration::days(30);
  doc.audit.updated_date = doc.audit.created_date;
  s.insert(doc.clone()).await.unwrap();

  let updated = svc
    .update(&doc.id.to_string(), ClassSectionInput {
      class_name: Some("10".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(updated.section, None);
  assert_eq!(updated.audit.created_date, doc.audit.created_date);
  assert!(updated.audit.updated_date > doc.audit.updated_date);
}

#[tokio::test]
async fn delete_then_find_is_not_found() {
  let svc = TermDetailService::new(store().await);
  let created = svc.create(term("Term 1")).await.unwrap();
  let id = created.id.to_string();

  let confirmation = svc.delete(&id).await.unwrap();
  assert_eq!(confirmation.message, "Term deleted successfully");

  assert!(matches!(
    svc.find_by_id(&id).await.unwrap_err(),
    Error::NotFound { .. }
  ));
  assert!(matches!(
    svc.delete(&id).await.unwrap_err(),
    Error::NotFound { .. }
  ));
}

#[tokio::test]
async fn malformed_path_id_is_invalid_id() {
  let svc: RecordService<SqliteStore, BehavioralRecord> =
    RecordService::new(store().await);
  assert!(matches!(
    svc.find_by_id("not-hex").await.unwrap_err(),
    Error::InvalidId(_)
  ));
  assert!(matches!(
    svc.delete("abc").await.unwrap_err(),
    Error::InvalidId(_)
  ));
}

#[tokio::test]
async fn delete_does_not_cascade() {
  let s = store().await;
  let sections = ClassSectionService::new(Arc::clone(&s));
  let records = BehavioralRecordService::new(Arc::clone(&s));

  let teacher = ObjectId::new();
  let mut body = section("11");
  body.teacher_id = Some(teacher.into());
  let sec = sections.create(body).await.unwrap();

  let mut rec = behavioral("Positive");
  rec.staff_id = Some(teacher.into());
  records.create(rec).await.unwrap();

  sections.delete(&sec.id.to_string()).await.unwrap();
  assert_eq!(records.find_all().await.unwrap().len(), 1);
}
