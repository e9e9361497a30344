//! Core types, validation and services for the student records API.
//!
//! This crate has no HTTP or database dependencies.
//! Storage backends implement [`store::DocumentStore`]; the HTTP layer drives
//! the [`service::RecordService`]s built on top of it.

pub mod entity;
pub mod error;
pub mod id;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use id::ObjectId;
