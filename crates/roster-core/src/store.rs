//! The `DocumentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Services and the HTTP layer depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{entity::Entity, id::ObjectId};

/// Abstraction over a collection-per-entity document store.
///
/// The store persists whatever it is handed: validation, identifier
/// assignment and timestamping happen before a document reaches it. Every
/// write touches exactly one document except [`DocumentStore::insert_many`],
/// which must be all-or-nothing.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DocumentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every document in `E`'s collection.
  fn find_all<E: Entity>(
    &self,
  ) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send + '_;

  /// Returns `None` if no document has that identifier.
  fn find_by_id<E: Entity>(
    &self,
    id: ObjectId,
  ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send + '_;

  fn insert<E: Entity>(
    &self,
    doc: E,
  ) -> impl Future<Output = Result<E, Self::Error>> + Send + '_;

  /// Persist every document in one atomic batch, or none of them.
  fn insert_many<E: Entity>(
    &self,
    docs: Vec<E>,
  ) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send + '_;

  /// Overwrite the document whose id is `doc.id()`. Returns `None` if there
  /// was no such document; nothing is written in that case.
  fn replace<E: Entity>(
    &self,
    doc: E,
  ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send + '_;

  /// Remove a document. Returns `false` if it did not exist.
  fn delete<E: Entity>(
    &self,
    id: ObjectId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
