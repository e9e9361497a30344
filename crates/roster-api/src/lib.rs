//! JSON REST API for the student records service.
//!
//! Exposes an axum [`Router`] backed by any [`DocumentStore`]. Each entity
//! gets one resource group; the routing layer only extracts path and body
//! parameters and shapes errors, everything else lives in
//! [`roster_core::service`]. Auth, TLS, and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod records;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::{
  entity::{
    BehavioralRecord, ClassSection, Entity, ExtracurricularActivity,
    StudentAward, TermDetail,
  },
  service::RecordService,
  store::DocumentStore,
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// | Resource | Bulk create |
/// |----------|-------------|
/// | `/behavioral-records` | no |
/// | `/extracurricular-activities` | no |
/// | `/student-awards` | `POST /student-awards/bulk` |
/// | `/class-section` | `POST /class-section/bulk` |
/// | `/term-details` | `POST /term-details/bulk` |
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DocumentStore + 'static,
{
  Router::new()
    .nest(
      "/behavioral-records",
      resource::<S, BehavioralRecord>().with_state(RecordService::new(store.clone())),
    )
    .nest(
      "/extracurricular-activities",
      resource::<S, ExtracurricularActivity>()
        .with_state(RecordService::new(store.clone())),
    )
    .nest(
      "/student-awards",
      with_bulk(resource::<S, StudentAward>())
        .with_state(RecordService::new(store.clone())),
    )
    .nest(
      "/class-section",
      with_bulk(resource::<S, ClassSection>())
        .with_state(RecordService::new(store.clone())),
    )
    .nest(
      "/term-details",
      with_bulk(resource::<S, TermDetail>()).with_state(RecordService::new(store)),
    )
}

/// The five single-document routes every resource group has.
fn resource<S, E>() -> Router<RecordService<S, E>>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  Router::new()
    .route("/", get(records::list::<S, E>).post(records::create::<S, E>))
    .route(
      "/{id}",
      get(records::get_one::<S, E>)
        .put(records::update::<S, E>)
        .delete(records::delete_one::<S, E>),
    )
}

fn with_bulk<S, E>(router: Router<RecordService<S, E>>) -> Router<RecordService<S, E>>
where
  S: DocumentStore + 'static,
  E: Entity,
{
  router.route("/bulk", post(records::create_bulk::<S, E>))
}
