//! SQL schema for the records store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
///
/// Every collection has the same shape: the hex `_id` as primary key and the
/// whole document as JSON. `rowid` order is insertion order.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS behavioral_records (
    id   TEXT PRIMARY KEY,
    body TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS extracurricular_activities (
    id   TEXT PRIMARY KEY,
    body TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS student_awards (
    id   TEXT PRIMARY KEY,
    body TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS class_sections (
    id   TEXT PRIMARY KEY,
    body TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS term_details (
    id   TEXT PRIMARY KEY,
    body TEXT NOT NULL
);

-- activity_id is unique across all activities.
CREATE UNIQUE INDEX IF NOT EXISTS extracurricular_activities_activity_id_idx
    ON extracurricular_activities (json_extract(body, '$.activity_id'));

PRAGMA user_version = 1;
";
