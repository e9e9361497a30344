//! [`SqliteStore`], the SQLite implementation of [`DocumentStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{ObjectId, entity::Entity, store::DocumentStore};

use crate::{
  Error, Result,
  encode::{decode_doc, encode_doc, encode_id, table},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A records store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "store opened");
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Every clone of this store fails with
  /// [`Error::Database`] afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DocumentStore impl ──────────────────────────────────────────────────────

impl DocumentStore for SqliteStore {
  type Error = Error;

  async fn find_all<E: Entity>(&self) -> Result<Vec<E>> {
    let sql = format!("SELECT body FROM {} ORDER BY rowid", table::<E>());

    let bodies: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    bodies.iter().map(|b| decode_doc(b)).collect()
  }

  async fn find_by_id<E: Entity>(&self, id: ObjectId) -> Result<Option<E>> {
    let sql = format!("SELECT body FROM {} WHERE id = ?1", table::<E>());
    let id_str = encode_id(id);

    let body: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    body.as_deref().map(decode_doc).transpose()
  }

  async fn insert<E: Entity>(&self, doc: E) -> Result<E> {
    let sql = format!("INSERT INTO {} (id, body) VALUES (?1, ?2)", table::<E>());
    let (id_str, body) = encode_doc(&doc)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![id_str, body])?;
        Ok(())
      })
      .await
      .map_err(|e| Error::on_write(E::COLLECTION, e))?;

    Ok(doc)
  }

  async fn insert_many<E: Entity>(&self, docs: Vec<E>) -> Result<Vec<E>> {
    let sql = format!("INSERT INTO {} (id, body) VALUES (?1, ?2)", table::<E>());
    let rows = docs.iter().map(encode_doc).collect::<Result<Vec<_>>>()?;

    // One transaction: any failed row rolls back the rows before it.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(&sql)?;
          for (id_str, body) in &rows {
            stmt.execute(rusqlite::params![id_str, body])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(|e| Error::on_write(E::COLLECTION, e))?;

    Ok(docs)
  }

  async fn replace<E: Entity>(&self, doc: E) -> Result<Option<E>> {
    let sql = format!("UPDATE {} SET body = ?2 WHERE id = ?1", table::<E>());
    let (id_str, body) = encode_doc(&doc)?;

    let changed: usize = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id_str, body])?))
      .await
      .map_err(|e| Error::on_write(E::COLLECTION, e))?;

    Ok((changed > 0).then_some(doc))
  }

  async fn delete<E: Entity>(&self, id: ObjectId) -> Result<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", table::<E>());
    let id_str = encode_id(id);

    let changed: usize = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id_str])?))
      .await?;

    Ok(changed > 0)
  }
}
