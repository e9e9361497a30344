//! Entity services: validation and stamping layered over a [`DocumentStore`].
//!
//! One generic [`RecordService`] serves all five collections; the
//! entity-specific rules (required fields, enumerations, `activity_id`
//! synthesis, reference coercion) live in each type's [`Entity::build`].
//! Nothing here retries: a failed write is returned to the caller as-is.

use std::{marker::PhantomData, sync::Arc};

use serde::Serialize;

use crate::{
  Error, Result,
  entity::{
    BehavioralRecord, ClassSection, Entity, ExtracurricularActivity, Stamp,
    StudentAward, TermDetail,
  },
  id::ObjectId,
  store::DocumentStore,
};

pub type BehavioralRecordService<S> = RecordService<S, BehavioralRecord>;
pub type ExtracurricularActivityService<S> =
  RecordService<S, ExtracurricularActivity>;
pub type StudentAwardService<S> = RecordService<S, StudentAward>;
pub type ClassSectionService<S> = RecordService<S, ClassSection>;
pub type TermDetailService<S> = RecordService<S, TermDetail>;

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
  pub message: String,
}

fn store_error<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}

/// CRUD over one collection.
///
/// Cloning is cheap: the store handle is reference-counted.
pub struct RecordService<S, E> {
  store:   Arc<S>,
  _entity: PhantomData<fn() -> E>,
}

impl<S, E> Clone for RecordService<S, E> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      _entity: PhantomData,
    }
  }
}

impl<S, E> RecordService<S, E>
where
  S: DocumentStore,
  E: Entity,
{
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      _entity: PhantomData,
    }
  }

  /// Parse an identifier taken from a request path.
  pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id.trim()).map_err(|_| Error::InvalidId(id.to_owned()))
  }

  pub async fn find_all(&self) -> Result<Vec<E>> {
    self.store.find_all::<E>().await.map_err(store_error)
  }

  pub async fn find_by_id(&self, id: &str) -> Result<E> {
    let id = Self::parse_id(id)?;
    self
      .store
      .find_by_id::<E>(id)
      .await
      .map_err(store_error)?
      .ok_or(Error::NotFound {
        entity: E::LABEL,
        id,
      })
  }

  pub async fn create(&self, input: E::Input) -> Result<E> {
    let doc = E::build(input, Stamp::create())?;
    let doc = self.store.insert(doc).await.map_err(store_error)?;
    tracing::debug!(collection = E::COLLECTION, id = %doc.id(), "document created");
    Ok(doc)
  }

  /// Validate every payload, then insert them as one batch. The first invalid
  /// payload aborts the whole request before the store is touched.
  pub async fn create_many(&self, inputs: Vec<E::Input>) -> Result<Vec<E>> {
    let docs = inputs
      .into_iter()
      .enumerate()
      .map(|(index, input)| {
        E::build(input, Stamp::create()).map_err(|e| Error::Batch {
          index,
          source: Box::new(e),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    let count = docs.len();
    let docs = self.store.insert_many(docs).await.map_err(store_error)?;
    tracing::debug!(collection = E::COLLECTION, count, "documents created");
    Ok(docs)
  }

  /// Replace the stored document with one built from `input`. Fields not
  /// present in `input` are cleared, except the identifiers and creation
  /// audit fields.
  pub async fn update(&self, id: &str, input: E::Input) -> Result<E> {
    let previous = self.find_by_id(id).await?;
    let doc = E::build(input, Stamp::replace(&previous))?;
    let id = doc.id();

    let doc = self
      .store
      .replace(doc)
      .await
      .map_err(store_error)?
      .ok_or(Error::NotFound {
        entity: E::LABEL,
        id,
      })?;
    tracing::debug!(collection = E::COLLECTION, %id, "document replaced");
    Ok(doc)
  }

  /// Unconditional and non-cascading: documents in other collections that
  /// reference this one are left untouched.
  pub async fn delete(&self, id: &str) -> Result<Confirmation> {
    let id = Self::parse_id(id)?;
    let removed = self.store.delete::<E>(id).await.map_err(store_error)?;
    if !removed {
      return Err(Error::NotFound {
        entity: E::LABEL,
        id,
      });
    }
    tracing::debug!(collection = E::COLLECTION, %id, "document deleted");
    Ok(Confirmation {
      message: format!("{} deleted successfully", E::LABEL),
    })
  }
}
